use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::error::InvocationError;
use crate::core::request::InvocationRequest;
use crate::core::resolver::resolve_executable;

pub const CHECKS_ARG: &str = "-checks=misc-assignment-*,misc-unused-parameters,misc-no-recursion";

pub const DECL_FILE_OPTION: &str = "misc-assignment-decl-exist.DeclFile";

/// Tells clang-tidy not to look for a compilation database.
pub const NO_COMPILATION_DB: &str = "--";

/// A fully assembled analyzer command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

#[derive(Serialize)]
struct InvocationJson {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Resolve the executable (searching `candidates` with `lookup` when the
    /// request names none) and assemble the argument list.
    pub fn build<F>(
        request: &InvocationRequest,
        candidates: &[PathBuf],
        lookup: F,
    ) -> Result<Self, InvocationError>
    where
        F: Fn(&Path) -> bool,
    {
        let program = match &request.executable {
            Some(path) => path.clone(),
            None => resolve_executable(candidates, lookup)?,
        };
        Ok(Self::assemble(program, request))
    }

    pub fn assemble(program: PathBuf, request: &InvocationRequest) -> Self {
        let mut args: Vec<OsString> = vec![CHECKS_ARG.into()];

        if let Some(declarations) = &request.declarations {
            args.push(config_arg(declarations).into());
        }

        args.push(request.target_file.clone().into_os_string());

        if !request.use_compilation_db {
            args.push(NO_COMPILATION_DB.into());
        }

        Self { program, args }
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args.iter().cloned())
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let json = InvocationJson {
            program: self.program.to_string_lossy().into_owned(),
            args: self
                .args
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
        };
        serde_json::to_value(json).unwrap_or(serde_json::Value::Null)
    }
}

/// `-config=` argument carrying the declarations file as a check option.
/// Single quotes are doubled so the path survives YAML single-quoting.
pub fn config_arg(declarations: &Path) -> String {
    let value = declarations.to_string_lossy().replace('\'', "''");
    format!(
        "-config={{CheckOptions: [{{key: '{}', value: '{}'}}]}}",
        DECL_FILE_OPTION, value
    )
}
