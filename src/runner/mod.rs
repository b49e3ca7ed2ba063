pub mod process;
pub mod traits;

pub use process::SystemRunner;
pub use traits::ProcessRunner;
