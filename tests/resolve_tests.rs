//! Integration tests for option resolution.
//!
//! Covers precedence between command line, config file and defaults, value
//! conversion from the config file, and message assembly from positional and
//! piped input.

use promptline::cli::input::InputSource;
use promptline::config::{OPTIONS, Resolved, Resolver, ValueKind, config_options};
use promptline::error::{CoercionError, ResolveError};
use std::ffi::OsString;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write `content` as a config file in `dir` and return its path.
fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    std::fs::write(&path, content).expect("Failed to write config file");
    path
}

/// Resolve `tokens` with no piped input and `config` as the fallback config file.
fn resolve(tokens: &[&str], config: Option<&Path>) -> Result<Resolved, ResolveError> {
    Resolver::new()
        .with_default_config_path(config.map(Path::to_path_buf))
        .with_input(InputSource::Terminal)
        .resolve(tokens.iter().copied())
}

#[test]
fn scenario_a_model_flag_and_positional_message() {
    let resolved = resolve(&["--model", "gpt-4", "hello"], None).unwrap();
    assert_eq!(resolved.options.model.as_deref(), Some("gpt-4"));
    assert_eq!(resolved.options.message, "hello");
}

#[test]
fn scenario_b_cli_temperature_beats_config() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "temperature: 0.9\n");

    let resolved = resolve(&["-t", "0.2"], Some(&config)).unwrap();
    assert_eq!(resolved.options.temperature, 0.2);
}

#[test]
fn scenario_c_config_temperature_applies_without_flag() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "temperature: 0.9\n");

    let resolved = resolve(&[], Some(&config)).unwrap();
    assert_eq!(resolved.options.temperature, 0.9);
}

#[test]
fn scenario_d_default_temperature() {
    let resolved = resolve(&[], None).unwrap();
    assert_eq!(resolved.options.temperature, 0.7);
}

#[test]
fn scenario_e_text_seed_coerced_to_integer() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "seed: \"7\"\n");

    let resolved = resolve(&[], Some(&config)).unwrap();
    assert_eq!(resolved.options.seed, 7);
    assert!(resolved.coercion_failures.is_empty());
}

#[test]
fn scenario_f_piped_input_appended_verbatim() {
    let resolved = Resolver::new()
        .with_default_config_path(None)
        .with_input(InputSource::piped(Cursor::new("line1\nline2\n")))
        .resolve(Vec::<String>::new())
        .unwrap();
    assert_eq!(resolved.options.message, "line1\nline2\n");
}

#[test]
fn explicit_default_value_on_cli_beats_config() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "temperature: 0.9\nstream: true\nseed: 12\n");

    let resolved = resolve(&["--temperature=0.7", "-e", "0"], Some(&config)).unwrap();
    assert_eq!(resolved.options.temperature, 0.7);
    assert_eq!(resolved.options.seed, 0);
    // Not named on the command line, so the file value applies.
    assert!(resolved.options.stream);
}

#[test]
fn every_config_option_named_on_cli_keeps_cli_value() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        r#"
pattern: from-file
temperature: 0.11
topp: 0.22
stream: false
presencepenalty: 0.33
raw: false
frequencypenalty: 0.44
model: from-file
modelContextLength: 555
seed: 666
suppressThink: false
thinkStartTag: "<file>"
thinkEndTag: "</file>"
disableResponsesAPI: false
voice: FileVoice
"#,
    );

    let mut tokens: Vec<String> = Vec::new();
    for spec in config_options() {
        let long = spec.long.expect("config options have long names");
        tokens.push(format!("--{long}"));
        match spec.kind {
            ValueKind::Bool => {}
            ValueKind::Float => tokens.push("0.5".into()),
            ValueKind::Integer => tokens.push("3".into()),
            _ => tokens.push("cli".into()),
        }
    }

    let resolved = Resolver::new()
        .with_default_config_path(Some(config))
        .with_input(InputSource::Terminal)
        .resolve(tokens)
        .unwrap();
    let options = resolved.options;

    assert_eq!(options.pattern.as_deref(), Some("cli"));
    assert_eq!(options.temperature, 0.5);
    assert_eq!(options.top_p, 0.5);
    assert!(options.stream);
    assert_eq!(options.presence_penalty, 0.5);
    assert!(options.raw);
    assert_eq!(options.frequency_penalty, 0.5);
    assert_eq!(options.model.as_deref(), Some("cli"));
    assert_eq!(options.model_context_length, 3);
    assert_eq!(options.seed, 3);
    assert!(options.suppress_think);
    assert_eq!(options.think_start_tag, "cli");
    assert_eq!(options.think_end_tag, "cli");
    assert!(options.disable_responses_api);
    assert_eq!(options.voice, "cli");
}

#[test]
fn every_config_option_not_named_takes_file_value() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        r#"
pattern: summarize
temperature: 0.1
topp: 0.2
stream: true
presencepenalty: 0.3
raw: true
frequencypenalty: 0.4
model: llama3
modelContextLength: 4096
seed: 42
suppressThink: true
thinkStartTag: "<r>"
thinkEndTag: "</r>"
disableResponsesAPI: true
voice: Puck
"#,
    );

    let options = resolve(&[], Some(&config)).unwrap().options;
    assert_eq!(options.pattern.as_deref(), Some("summarize"));
    assert_eq!(options.temperature, 0.1);
    assert_eq!(options.top_p, 0.2);
    assert!(options.stream);
    assert_eq!(options.presence_penalty, 0.3);
    assert!(options.raw);
    assert_eq!(options.frequency_penalty, 0.4);
    assert_eq!(options.model.as_deref(), Some("llama3"));
    assert_eq!(options.model_context_length, 4096);
    assert_eq!(options.seed, 42);
    assert!(options.suppress_think);
    assert_eq!(options.think_start_tag, "<r>");
    assert_eq!(options.think_end_tag, "</r>");
    assert!(options.disable_responses_api);
    assert_eq!(options.voice, "Puck");
}

#[test]
fn cli_only_options_ignore_config_file() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        "context: from-file\noutput: out.md\naddress: \":9999\"\n",
    );

    let options = resolve(&[], Some(&config)).unwrap().options;
    assert_eq!(options.context, None);
    assert_eq!(options.output, None);
    assert_eq!(options.serve_address, ":8080");
    assert!(OPTIONS.iter().any(|spec| spec.name == "context" && spec.config_key.is_none()));
}

#[test]
fn unconvertible_value_keeps_default_and_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "seed: seven\ntemperature: 0.4\n");

    let resolved = resolve(&[], Some(&config)).unwrap();
    assert_eq!(resolved.options.seed, 0);
    assert_eq!(resolved.options.temperature, 0.4);
    assert_eq!(
        resolved.coercion_failures,
        vec![CoercionError::Unparsable {
            key: "seed",
            text: "seven".to_string(),
            expected: ValueKind::Integer,
        }]
    );
}

#[test]
fn coercion_of_real_and_boolean_text() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        "modelContextLength: \"42.9\"\nstream: \"true\"\nraw: \"false\"\n",
    );

    let options = resolve(&[], Some(&config)).unwrap().options;
    assert_eq!(options.model_context_length, 42);
    assert!(options.stream);
    assert!(!options.raw);
}

#[test]
fn unparsable_config_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "model: [unclosed\n");

    let err = resolve(&["hello"], Some(&config)).unwrap_err();
    assert!(matches!(err, ResolveError::ConfigParse { .. }), "{err:?}");
}

#[test]
fn explicit_config_path_must_exist() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.yaml");

    let err = Resolver::new()
        .with_default_config_path(None)
        .with_input(InputSource::Terminal)
        .resolve([OsString::from("--config"), missing.clone().into_os_string()])
        .unwrap_err();
    assert!(err.to_string().contains("config file not found"));
    assert!(matches!(err, ResolveError::ConfigNotFound { path } if path == missing));
}

#[test]
fn unknown_flag_is_fatal() {
    let err = resolve(&["--definitely-not-a-flag"], None).unwrap_err();
    assert!(err.as_parse().is_some());
}

#[test]
fn positional_and_piped_input_combined() {
    let resolved = Resolver::new()
        .with_default_config_path(None)
        .with_input(InputSource::piped(Cursor::new("piped body\n")))
        .resolve(["-p", "summarize", "ignored", "instructions"])
        .unwrap();
    assert_eq!(resolved.options.message, "instructions\npiped body\n");
    assert!(resolved.options.is_chat_request());
}

#[test]
fn resolution_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "temperature: 0.9\nseed: \"3\"\nmodel: llama3\n");
    let tokens = ["-m", "gpt-4", "--stream", "hello"];

    let first = resolve(&tokens, Some(&config)).unwrap();
    let second = resolve(&tokens, Some(&config)).unwrap();
    assert_eq!(first.options, second.options);
    assert_eq!(first.config_path, second.config_path);
    assert_eq!(first.coercion_failures, second.coercion_failures);
}

#[test]
fn chat_options_reflect_merged_values() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        "temperature: 0.2\nvoice: Charon\nthinkStartTag: \"\"\n",
    );

    let options = resolve(&["--model", "gpt-4"], Some(&config))
        .unwrap()
        .options
        .chat_options();
    assert_eq!(options.model.as_deref(), Some("gpt-4"));
    assert_eq!(options.temperature, 0.2);
    assert_eq!(options.voice, "Charon");
    assert_eq!(options.think_start_tag, "<think>");
    assert_eq!(options.think_end_tag, "</think>");
}

#[test]
fn config_path_that_is_a_directory_is_fatal() {
    let temp = TempDir::new().unwrap();

    let err = Resolver::new()
        .with_default_config_path(None)
        .with_input(InputSource::Terminal)
        .resolve([OsString::from("--config"), temp.path().as_os_str().to_owned()])
        .unwrap_err();
    assert!(
        matches!(&err, ResolveError::ConfigRead { path, .. } if path == temp.path()),
        "{err:?}"
    );
}

#[test]
fn integer_text_beyond_float_precision_is_exact() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        "modelContextLength: \"9007199254740993\"\nseed: \"1e300\"\n",
    );

    let resolved = resolve(&[], Some(&config)).unwrap();
    assert_eq!(resolved.options.model_context_length, 9_007_199_254_740_993);
    assert_eq!(resolved.options.seed, 0);
    assert_eq!(
        resolved.coercion_failures,
        vec![CoercionError::Unparsable {
            key: "seed",
            text: "1e300".to_string(),
            expected: ValueKind::Integer,
        }]
    );
}
