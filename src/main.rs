//! promptline
//!
//! Resolves options from the command line, the YAML config file and defaults,
//! then prints the resolved options as YAML.

use anyhow::Result;
use promptline::config::Resolver;
use promptline::error::ResolveError;
use promptline::logging;
use tracing::{debug, info};

fn main() -> Result<()> {
    let debug = logging::debug_requested();
    logging::init(debug)?;

    let resolver = Resolver::new().with_debug(debug);
    let resolved = match resolver.resolve(std::env::args_os().skip(1)) {
        Ok(resolved) => resolved,
        // Usage errors, --help and --version: clap prints and picks the exit code.
        Err(ResolveError::Parse(err)) => err.exit(),
        Err(err) => return Err(err.into()),
    };

    if let Some(path) = &resolved.config_path {
        info!(path = %path.display(), "Applied config file");
    }
    if !resolved.coercion_failures.is_empty() {
        debug!(
            count = resolved.coercion_failures.len(),
            "Some config values were skipped"
        );
    }

    let rendered = serde_yaml::to_string(&resolved.options)?;
    print!("{}", rendered);
    Ok(())
}
