//! Creative career assistant.
//!
//! Wraps an [`AssistantAgent`] with the coaching persona, tailored to the
//! signed-in artist's profile, and keeps the running transcript. Failures never
//! surface as errors: the user always gets a reply line.

use atelier_core::artist::ArtistProfile;
use atelier_core::assistant::AssistantAgent;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const CONNECTION_FAILED_REPLY: &str = "Connection to Atelier Intelligence failed.";
pub const EMPTY_ANSWER_REPLY: &str = "I couldn't generate a response. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantRole {
    User,
    Assistant,
}

/// One line of the assistant transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantTurn {
    pub role: AssistantRole,
    pub text: String,
}

pub struct CreativeAssistantService {
    agent: Option<Arc<dyn AssistantAgent>>,
    history: RwLock<Vec<AssistantTurn>>,
}

impl CreativeAssistantService {
    /// `None` means no agent is configured; every question then gets the
    /// connection-failure reply.
    pub fn new(agent: Option<Arc<dyn AssistantAgent>>) -> Self {
        Self {
            agent,
            history: RwLock::new(Vec::new()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.agent.is_some()
    }

    /// Builds the coaching instruction for the given artist.
    pub fn system_instruction(profile: Option<&ArtistProfile>) -> String {
        let name = profile
            .map(|p| p.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("an artist");
        let mediums = profile
            .map(|p| p.mediums.join(", "))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "various mediums".to_string());
        let headline = profile
            .map(|p| p.headline.as_str())
            .filter(|h| !h.is_empty())
            .unwrap_or(ArtistProfile::PLACEHOLDER_HEADLINE);

        format!(
            "You are a professional Creative Career Coach for Atelier, a networking platform for artists.\n\
             The current user is {name} who works in {mediums}.\n\
             Their current headline is \"{headline}\".\n\
             Help them optimize their bio, suggest better headlines, or give professional advice on their portfolio.\n\
             Keep answers concise, professional, and minimalist in tone."
        )
    }

    /// Asks the assistant a question.
    ///
    /// Blank prompts are ignored (`None`). Otherwise both the question and the
    /// reply are appended to the transcript and the reply is returned.
    pub async fn ask(&self, profile: Option<&ArtistProfile>, prompt: &str) -> Option<String> {
        if prompt.trim().is_empty() {
            return None;
        }

        self.record(AssistantRole::User, prompt).await;

        let reply = match &self.agent {
            Some(agent) => {
                let instruction = Self::system_instruction(profile);
                match agent.ask(&instruction, prompt).await {
                    Ok(text) if !text.trim().is_empty() => text,
                    Ok(_) => {
                        tracing::warn!("[CreativeAssistant] {} returned an empty answer", agent.name());
                        EMPTY_ANSWER_REPLY.to_string()
                    }
                    Err(e) => {
                        tracing::error!("[CreativeAssistant] {} failed: {}", agent.name(), e);
                        CONNECTION_FAILED_REPLY.to_string()
                    }
                }
            }
            None => {
                tracing::warn!("[CreativeAssistant] No assistant agent configured");
                CONNECTION_FAILED_REPLY.to_string()
            }
        };

        self.record(AssistantRole::Assistant, &reply).await;
        Some(reply)
    }

    pub async fn history(&self) -> Vec<AssistantTurn> {
        self.history.read().await.clone()
    }

    async fn record(&self, role: AssistantRole, text: &str) {
        self.history.write().await.push(AssistantTurn {
            role,
            text: text.to_string(),
        });
    }
}
