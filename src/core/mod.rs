pub mod config;
pub mod error;
pub mod invocation;
pub mod request;
pub mod resolver;
