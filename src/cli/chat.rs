//! Read-only views of resolved flags for request-building code.

use super::Flags;
use super::input::append_message;
use serde::Serialize;
use std::collections::BTreeMap;

const DEFAULT_THINK_START_TAG: &str = "<think>";
const DEFAULT_THINK_END_TAG: &str = "</think>";

/// Model-facing chat options taken from resolved flags.
///
/// Values are passed through unvalidated; model names, image sizes and the
/// like are checked by the code that uses them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatOptions {
    pub model: Option<String>,
    pub temperature: f64,
    pub top_p: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    pub raw: bool,
    pub seed: i64,
    pub model_context_length: i64,
    pub search: bool,
    pub search_location: Option<String>,
    pub image_file: Option<String>,
    pub image_size: Option<String>,
    pub image_quality: Option<String>,
    pub image_compression: i64,
    pub image_background: Option<String>,
    pub suppress_think: bool,
    pub think_start_tag: String,
    pub think_end_tag: String,
    pub voice: String,
}

impl Flags {
    /// Chat options for the model request. Empty think tags fall back to the
    /// defaults.
    pub fn chat_options(&self) -> ChatOptions {
        let tag_or = |tag: &str, default: &str| {
            if tag.is_empty() {
                default.to_string()
            } else {
                tag.to_string()
            }
        };

        ChatOptions {
            model: self.model.clone(),
            temperature: self.temperature,
            top_p: self.top_p,
            presence_penalty: self.presence_penalty,
            frequency_penalty: self.frequency_penalty,
            raw: self.raw,
            seed: self.seed,
            model_context_length: self.model_context_length,
            search: self.search,
            search_location: self.search_location.clone(),
            image_file: self.image_file.clone(),
            image_size: self.image_size.clone(),
            image_quality: self.image_quality.clone(),
            image_compression: self.image_compression,
            image_background: self.image_background.clone(),
            suppress_think: self.suppress_think,
            think_start_tag: tag_or(&self.think_start_tag, DEFAULT_THINK_START_TAG),
            think_end_tag: tag_or(&self.think_end_tag, DEFAULT_THINK_END_TAG),
            voice: self.voice.clone(),
        }
    }

    /// Whether these flags describe something to send to a model.
    pub fn is_chat_request(&self) -> bool {
        let set = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        !self.message.is_empty()
            || !self.attachments.is_empty()
            || set(&self.context)
            || set(&self.session)
            || set(&self.pattern)
    }

    /// Append text to the message, newline-separated from existing content.
    pub fn append_message(&mut self, text: &str) {
        self.message = append_message(&self.message, text);
    }

    /// Pattern variables by name; a later `-v` for the same name wins.
    pub fn pattern_variables_map(&self) -> BTreeMap<&str, &str> {
        self.pattern_variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}
