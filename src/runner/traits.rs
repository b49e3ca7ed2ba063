use anyhow::Result;
use async_trait::async_trait;

use crate::core::invocation::Invocation;

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the invocation to completion and return the exit code to relay.
    async fn run(&self, invocation: &Invocation) -> Result<i32>;
}
