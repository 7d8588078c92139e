//! Command-line definitions for promptline.
//!
//! `Flags` is both the clap parser and the resolved options object: parsing
//! fills it with command-line values and defaults, the config merge overwrites
//! fields the user did not name, and the input assembler fills `message`.
//! The option table in `config::schema` mirrors the `#[arg]` attributes here.

pub mod chat;
pub mod input;

use crate::config::Slot;
use crate::error::ResolveResult;
use clap::Parser;
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;

/// Run LLM prompt patterns from the command line
#[derive(Parser, Debug, Clone, PartialEq, Serialize)]
#[command(name = "promptline", author, version, about, long_about = None)]
pub struct Flags {
    /// Choose a pattern from the available patterns
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Values for pattern variables, e.g. -v=#role:expert -v=#points:30
    #[arg(short = 'v', long = "variable", value_name = "NAME:VALUE", value_parser = parse_variable)]
    pub pattern_variables: Vec<(String, String)>,

    /// Choose a context from the available contexts
    #[arg(short = 'C', long)]
    pub context: Option<String>,

    /// Choose a session from the available sessions
    #[arg(long)]
    pub session: Option<String>,

    /// Attachment path or URL (e.g. for image recognition messages)
    #[arg(short = 'a', long = "attachment")]
    pub attachments: Vec<String>,

    /// Run setup for all reconfigurable parts
    #[arg(short = 'S', long)]
    pub setup: bool,

    /// Set temperature
    #[arg(short, long, default_value = "0.7", allow_negative_numbers = true)]
    pub temperature: f64,

    /// Set top P
    #[arg(short = 'T', long = "topp", default_value = "0.9", allow_negative_numbers = true)]
    pub top_p: f64,

    /// Stream
    #[arg(short, long)]
    pub stream: bool,

    /// Set presence penalty
    #[arg(
        short = 'P',
        long = "presencepenalty",
        default_value = "0.0",
        allow_negative_numbers = true
    )]
    pub presence_penalty: f64,

    /// Use the model defaults without sending chat options, and send patterns with the user role
    #[arg(short, long)]
    pub raw: bool,

    /// Set frequency penalty
    #[arg(
        short = 'F',
        long = "frequencypenalty",
        default_value = "0.0",
        allow_negative_numbers = true
    )]
    pub frequency_penalty: f64,

    /// List all patterns
    #[arg(short = 'l', long = "listpatterns")]
    pub list_patterns: bool,

    /// List all available models
    #[arg(short = 'L', long = "listmodels")]
    pub list_all_models: bool,

    /// List all contexts
    #[arg(short = 'x', long = "listcontexts")]
    pub list_all_contexts: bool,

    /// List all sessions
    #[arg(short = 'X', long = "listsessions")]
    pub list_all_sessions: bool,

    /// Update patterns
    #[arg(short = 'U', long = "updatepatterns")]
    pub update_patterns: bool,

    /// Copy to clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Choose model
    #[arg(short, long)]
    pub model: Option<String>,

    /// Model context length (only affects ollama)
    #[arg(long = "modelContextLength", default_value = "0")]
    pub model_context_length: i64,

    /// Output to file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output the entire session (also a temporary one) to the output file
    #[arg(long)]
    pub output_session: bool,

    /// Number of latest patterns to list
    #[arg(short = 'n', long = "latest", default_value = "0")]
    pub latest_patterns: usize,

    /// Change default model
    #[arg(short = 'd', long = "changeDefaultModel")]
    pub change_default_model: bool,

    /// YouTube video or playlist URL to grab transcript and comments from
    #[arg(short, long)]
    pub youtube: Option<String>,

    /// Prefer playlist over video if both ids are present in the URL
    #[arg(long = "playlist")]
    pub youtube_playlist: bool,

    /// Grab transcript from YouTube video and send to chat (the default)
    #[arg(long = "transcript")]
    pub youtube_transcript: bool,

    /// Grab transcript from YouTube video with timestamps and send to chat
    #[arg(long = "transcript-with-timestamps")]
    pub youtube_transcript_with_timestamps: bool,

    /// Grab comments from YouTube video and send to chat
    #[arg(long = "comments")]
    pub youtube_comments: bool,

    /// Output video metadata
    #[arg(long = "metadata")]
    pub youtube_metadata: bool,

    /// Language code for the chat, e.g. -g=en -g=zh
    #[arg(short = 'g', long)]
    pub language: Option<String>,

    /// Scrape website URL to markdown
    #[arg(short = 'u', long = "scrape_url")]
    pub scrape_url: Option<String>,

    /// Search question
    #[arg(short = 'q', long = "scrape_question")]
    pub scrape_question: Option<String>,

    /// Seed to be used for generation
    #[arg(short = 'e', long, default_value = "0")]
    pub seed: i64,

    /// Wipe context
    #[arg(short = 'w', long = "wipecontext")]
    pub wipe_context: Option<String>,

    /// Wipe session
    #[arg(short = 'W', long = "wipesession")]
    pub wipe_session: Option<String>,

    /// Print context
    #[arg(long = "printcontext")]
    pub print_context: Option<String>,

    /// Print session
    #[arg(long = "printsession")]
    pub print_session: Option<String>,

    /// Convert HTML input into a clean, readable view
    #[arg(long = "readability")]
    pub html_readability: bool,

    /// Apply variables to user input
    #[arg(long)]
    pub input_has_vars: bool,

    /// Show what would be sent to the model without actually sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Serve the REST API
    #[arg(long)]
    pub serve: bool,

    /// Serve the REST API with ollama endpoints
    #[arg(long = "serveOllama")]
    pub serve_ollama: bool,

    /// The address to bind the REST API
    #[arg(long = "address", default_value = ":8080")]
    pub serve_address: String,

    /// API key used to secure server routes
    #[arg(long = "api-key")]
    pub serve_api_key: Option<String>,

    /// Path to YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List all registered extensions
    #[arg(long = "listextensions")]
    pub list_extensions: bool,

    /// Register a new extension from config file path
    #[arg(long = "addextension")]
    pub add_extension: Option<String>,

    /// Remove a registered extension by name
    #[arg(long = "rmextension")]
    pub remove_extension: Option<String>,

    /// Choose a strategy from the available strategies
    #[arg(long)]
    pub strategy: Option<String>,

    /// List all strategies
    #[arg(long = "liststrategies")]
    pub list_strategies: bool,

    /// List all vendors
    #[arg(long = "listvendors")]
    pub list_vendors: bool,

    /// Output raw list without headers/formatting (for shell completion)
    #[arg(long = "shell-complete-list")]
    pub shell_complete_output: bool,

    /// Enable web search tool for supported models
    #[arg(long)]
    pub search: bool,

    /// Set location for web search results (e.g., 'America/Los_Angeles')
    #[arg(long)]
    pub search_location: Option<String>,

    /// Save generated image to specified file path (e.g., 'output.png')
    #[arg(long)]
    pub image_file: Option<String>,

    /// Image dimensions: 1024x1024, 1536x1024, 1024x1536, auto
    #[arg(long)]
    pub image_size: Option<String>,

    /// Image quality: low, medium, high, auto
    #[arg(long)]
    pub image_quality: Option<String>,

    /// Compression level 0-100 for JPEG/WebP formats (0 = not set)
    #[arg(long, default_value = "0")]
    pub image_compression: i64,

    /// Background type: opaque, transparent
    #[arg(long)]
    pub image_background: Option<String>,

    /// Suppress text enclosed in thinking tags
    #[arg(long)]
    pub suppress_think: bool,

    /// Start tag for thinking sections
    #[arg(long, default_value = "<think>")]
    pub think_start_tag: String,

    /// End tag for thinking sections
    #[arg(long, default_value = "</think>")]
    pub think_end_tag: String,

    /// Disable the OpenAI Responses API
    #[arg(long)]
    pub disable_responses_api: bool,

    /// TTS voice name for supported models (e.g., Kore, Charon, Puck)
    #[arg(long, default_value = "Kore")]
    pub voice: String,

    /// List all available Gemini TTS voices
    #[arg(long)]
    pub list_gemini_voices: bool,

    /// Message to send to chat (positional text plus piped stdin)
    #[arg(skip)]
    pub message: String,

    /// Trailing message text; only the last token is used
    #[arg(value_name = "MESSAGE")]
    #[serde(skip)]
    pub positional: Vec<String>,
}

impl Flags {
    /// Writable view of the field behind a config-file key.
    ///
    /// Returns `None` for keys that are not in the option table.
    pub fn slot_mut(&mut self, config_key: &str) -> Option<Slot<'_>> {
        let slot = match config_key {
            "pattern" => Slot::OptionalText(&mut self.pattern),
            "temperature" => Slot::Float(&mut self.temperature),
            "topp" => Slot::Float(&mut self.top_p),
            "stream" => Slot::Bool(&mut self.stream),
            "presencepenalty" => Slot::Float(&mut self.presence_penalty),
            "raw" => Slot::Bool(&mut self.raw),
            "frequencypenalty" => Slot::Float(&mut self.frequency_penalty),
            "model" => Slot::OptionalText(&mut self.model),
            "modelContextLength" => Slot::Integer(&mut self.model_context_length),
            "seed" => Slot::Integer(&mut self.seed),
            "suppressThink" => Slot::Bool(&mut self.suppress_think),
            "thinkStartTag" => Slot::Text(&mut self.think_start_tag),
            "thinkEndTag" => Slot::Text(&mut self.think_end_tag),
            "disableResponsesAPI" => Slot::Bool(&mut self.disable_responses_api),
            "voice" => Slot::Text(&mut self.voice),
            _ => return None,
        };
        Some(slot)
    }
}

/// Parse raw tokens (without the program name) into flags and leftover
/// positional tokens.
///
/// Unset options take their declared defaults. Help and version requests
/// surface as parse errors so the caller decides how to exit.
pub fn parse_flags<I, T>(tokens: I) -> ResolveResult<(Flags, Vec<String>)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv =
        std::iter::once(OsString::from("promptline")).chain(tokens.into_iter().map(Into::into));
    let mut flags = Flags::try_parse_from(argv)?;
    let positional = std::mem::take(&mut flags.positional);
    Ok((flags, positional))
}

/// Parse a `NAME:VALUE` pattern variable.
fn parse_variable(raw: &str) -> Result<(String, String), String> {
    raw.split_once(':')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME:VALUE, got '{}'", raw))
}
