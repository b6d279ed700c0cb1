//! AI assistant collaborator trait.

use async_trait::async_trait;

use crate::error::Result;

/// An LLM that answers a single user prompt under a system instruction.
#[async_trait]
pub trait AssistantAgent: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    async fn ask(&self, system_instruction: &str, prompt: &str) -> Result<String>;
}
