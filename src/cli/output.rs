use colored::*;
use std::ffi::OsStr;

use crate::core::invocation::Invocation;

pub struct OutputFormatter {
    format: String,
}

impl OutputFormatter {
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
        }
    }

    pub fn display(&self, invocation: &Invocation) {
        println!("{}", self.render(invocation));
    }

    pub fn render(&self, invocation: &Invocation) -> String {
        match self.format.as_str() {
            "json" => self.render_json(invocation),
            _ => self.render_text(invocation),
        }
    }

    fn render_json(&self, invocation: &Invocation) -> String {
        serde_json::to_string_pretty(&invocation.to_json()).unwrap_or_default()
    }

    fn render_text(&self, invocation: &Invocation) -> String {
        invocation
            .argv()
            .iter()
            .map(|arg| shell_quote(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Print a diagnostic to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

/// Quote an argument so the printed line can be pasted into a POSIX shell.
fn shell_quote(arg: &OsStr) -> String {
    let arg = arg.to_string_lossy();
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=,:+@%".contains(c));
    if safe {
        arg.into_owned()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
