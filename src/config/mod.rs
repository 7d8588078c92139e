//! Option resolution across command line, config file and defaults.
//!
//! Precedence, highest first:
//! 1. **Command line** - any option whose flag appears in the raw arguments
//! 2. **Config file** - `--config <path>`, else `~/.config/promptline/config.yaml`
//! 3. **Defaults** - declared in the option table
//!
//! Config values whose YAML type differs from the option's type are converted
//! where possible; a value that cannot be converted is logged and skipped.

mod coerce;
mod loader;
mod merge;
mod prescan;
mod resolve;
mod schema;

pub use coerce::{Slot, assign, assign_with_conversion, parse_bool_token};
pub use loader::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigFileValues, FileValue, default_config_location,
    expand_path, load_config_file,
};
pub use merge::merge_config;
pub use prescan::{UsedFlagSet, extract_flag, flag_to_config_key, scan_used_flags};
pub use resolve::{Resolved, Resolver};
pub use schema::{OPTIONS, OptionSpec, ValueKind, config_options};
