//! Static option table.
//!
//! Every configurable option is declared here once, in CLI help order, with its
//! invocation names, its config-file key and its default. The pre-scanner and
//! the merger walk this table directly; `cli::Flags` carries the matching clap
//! definitions and a unit test keeps the two in step.

use serde::Serialize;
use std::fmt;

/// Declared value type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Integer,
    Float,
    Bool,
    /// Mapping of string to string.
    Mapping,
    /// Sequence of strings.
    List,
}

impl ValueKind {
    /// Whether values of this kind are single scalars.
    pub fn is_scalar(self) -> bool {
        !matches!(self, ValueKind::Mapping | ValueKind::List)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Text => write!(f, "string"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Bool => write!(f, "boolean"),
            ValueKind::Mapping => write!(f, "mapping"),
            ValueKind::List => write!(f, "sequence"),
        }
    }
}

/// Descriptor for one configurable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Stable identifier (matches the `Flags` field name).
    pub name: &'static str,
    pub short: Option<char>,
    pub long: Option<&'static str>,
    /// Key in the YAML config file. `None` means CLI-only.
    pub config_key: Option<&'static str>,
    pub kind: ValueKind,
    /// Default as clap renders it; empty when the option has none.
    pub default: &'static str,
}

impl OptionSpec {
    const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            short: None,
            long: None,
            config_key: None,
            kind,
            default: "",
        }
    }

    const fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    const fn long(mut self, long: &'static str) -> Self {
        self.long = Some(long);
        self
    }

    const fn key(mut self, key: &'static str) -> Self {
        self.config_key = Some(key);
        self
    }

    const fn defaults_to(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }
}

use ValueKind::{Bool, Float, Integer, List, Mapping, Text};

/// All options, in help order.
pub static OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("pattern", Text)
        .short('p')
        .long("pattern")
        .key("pattern"),
    OptionSpec::new("pattern_variables", Mapping)
        .short('v')
        .long("variable"),
    OptionSpec::new("context", Text).short('C').long("context"),
    OptionSpec::new("session", Text).long("session"),
    OptionSpec::new("attachments", List)
        .short('a')
        .long("attachment"),
    OptionSpec::new("setup", Bool).short('S').long("setup"),
    OptionSpec::new("temperature", Float)
        .short('t')
        .long("temperature")
        .key("temperature")
        .defaults_to("0.7"),
    OptionSpec::new("top_p", Float)
        .short('T')
        .long("topp")
        .key("topp")
        .defaults_to("0.9"),
    OptionSpec::new("stream", Bool)
        .short('s')
        .long("stream")
        .key("stream"),
    OptionSpec::new("presence_penalty", Float)
        .short('P')
        .long("presencepenalty")
        .key("presencepenalty")
        .defaults_to("0.0"),
    OptionSpec::new("raw", Bool)
        .short('r')
        .long("raw")
        .key("raw"),
    OptionSpec::new("frequency_penalty", Float)
        .short('F')
        .long("frequencypenalty")
        .key("frequencypenalty")
        .defaults_to("0.0"),
    OptionSpec::new("list_patterns", Bool)
        .short('l')
        .long("listpatterns"),
    OptionSpec::new("list_all_models", Bool)
        .short('L')
        .long("listmodels"),
    OptionSpec::new("list_all_contexts", Bool)
        .short('x')
        .long("listcontexts"),
    OptionSpec::new("list_all_sessions", Bool)
        .short('X')
        .long("listsessions"),
    OptionSpec::new("update_patterns", Bool)
        .short('U')
        .long("updatepatterns"),
    OptionSpec::new("copy", Bool).short('c').long("copy"),
    OptionSpec::new("model", Text)
        .short('m')
        .long("model")
        .key("model"),
    OptionSpec::new("model_context_length", Integer)
        .long("modelContextLength")
        .key("modelContextLength")
        .defaults_to("0"),
    OptionSpec::new("output", Text).short('o').long("output"),
    OptionSpec::new("output_session", Bool)
        .long("output-session"),
    OptionSpec::new("latest_patterns", Integer)
        .short('n')
        .long("latest")
        .defaults_to("0"),
    OptionSpec::new("change_default_model", Bool)
        .short('d')
        .long("changeDefaultModel"),
    OptionSpec::new("youtube", Text).short('y').long("youtube"),
    OptionSpec::new("youtube_playlist", Bool).long("playlist"),
    OptionSpec::new("youtube_transcript", Bool)
        .long("transcript"),
    OptionSpec::new("youtube_transcript_with_timestamps", Bool)
        .long("transcript-with-timestamps"),
    OptionSpec::new("youtube_comments", Bool).long("comments"),
    OptionSpec::new("youtube_metadata", Bool).long("metadata"),
    OptionSpec::new("language", Text)
        .short('g')
        .long("language"),
    OptionSpec::new("scrape_url", Text)
        .short('u')
        .long("scrape_url"),
    OptionSpec::new("scrape_question", Text)
        .short('q')
        .long("scrape_question"),
    OptionSpec::new("seed", Integer)
        .short('e')
        .long("seed")
        .key("seed")
        .defaults_to("0"),
    OptionSpec::new("wipe_context", Text)
        .short('w')
        .long("wipecontext"),
    OptionSpec::new("wipe_session", Text)
        .short('W')
        .long("wipesession"),
    OptionSpec::new("print_context", Text).long("printcontext"),
    OptionSpec::new("print_session", Text).long("printsession"),
    OptionSpec::new("html_readability", Bool)
        .long("readability"),
    OptionSpec::new("input_has_vars", Bool)
        .long("input-has-vars"),
    OptionSpec::new("dry_run", Bool).long("dry-run"),
    OptionSpec::new("serve", Bool).long("serve"),
    OptionSpec::new("serve_ollama", Bool).long("serveOllama"),
    OptionSpec::new("serve_address", Text)
        .long("address")
        .defaults_to(":8080"),
    OptionSpec::new("serve_api_key", Text).long("api-key"),
    OptionSpec::new("config", Text).long("config"),
    OptionSpec::new("list_extensions", Bool)
        .long("listextensions"),
    OptionSpec::new("add_extension", Text).long("addextension"),
    OptionSpec::new("remove_extension", Text)
        .long("rmextension"),
    OptionSpec::new("strategy", Text).long("strategy"),
    OptionSpec::new("list_strategies", Bool)
        .long("liststrategies"),
    OptionSpec::new("list_vendors", Bool).long("listvendors"),
    OptionSpec::new("shell_complete_output", Bool)
        .long("shell-complete-list"),
    OptionSpec::new("search", Bool).long("search"),
    OptionSpec::new("search_location", Text)
        .long("search-location"),
    OptionSpec::new("image_file", Text).long("image-file"),
    OptionSpec::new("image_size", Text).long("image-size"),
    OptionSpec::new("image_quality", Text).long("image-quality"),
    OptionSpec::new("image_compression", Integer)
        .long("image-compression")
        .defaults_to("0"),
    OptionSpec::new("image_background", Text)
        .long("image-background"),
    OptionSpec::new("suppress_think", Bool)
        .long("suppress-think")
        .key("suppressThink"),
    OptionSpec::new("think_start_tag", Text)
        .long("think-start-tag")
        .key("thinkStartTag")
        .defaults_to("<think>"),
    OptionSpec::new("think_end_tag", Text)
        .long("think-end-tag")
        .key("thinkEndTag")
        .defaults_to("</think>"),
    OptionSpec::new("disable_responses_api", Bool)
        .long("disable-responses-api")
        .key("disableResponsesAPI"),
    OptionSpec::new("voice", Text)
        .long("voice")
        .key("voice")
        .defaults_to("Kore"),
    OptionSpec::new("list_gemini_voices", Bool)
        .long("list-gemini-voices"),
];

/// Options that can be set from the config file.
pub fn config_options() -> impl Iterator<Item = &'static OptionSpec> {
    OPTIONS.iter().filter(|spec| spec.config_key.is_some())
}
