//! Presentation of transcripts.
//!
//! The core hands back [`vfs::Transcript`]s with symbolic prompts and links.
//! This module turns them into HTML for the web front end ([`html`]) and
//! into plain or ANSI-coloured text for the CLI ([`text`]).

pub mod html;
pub mod text;

use crate::config::PromptConfig;

/// Identity shown in the shell prompt, `user@host`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub user: String,
    pub host: String,
}

impl Prompt {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    /// The `user@host` part of the prompt.
    pub fn identity(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::from(&PromptConfig::default())
    }
}

impl From<&PromptConfig> for Prompt {
    fn from(config: &PromptConfig) -> Self {
        Self::new(config.user.clone(), config.host.clone())
    }
}
