//! Configuration loaded from `.sentimap.toml`.
//!
//! The file is looked up in the working directory and up to nine of its
//! ancestors. Every section is optional; missing sections fall back to the
//! built-in defaults.

mod core;
mod loader;
mod thresholds;

pub use core::{IndicatorsConfig, LexiconConfig, OutputConfig, SentimapConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, parse_config_strict, unknown_keys, CONFIG_FILE_NAME,
};
pub use thresholds::ThresholdsConfig;

/// Template written by `sentimap init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# sentimap configuration

[thresholds]
# Compound scores within +/- this band are neutral
neutral_band = 0.05
# Text containing a contrast marker is mixed while |compound| is below this
mixed_ceiling = 0.5

[indicators]
# Extra contrast markers, e.g. ["mind you"]
extra = []
replace_defaults = false

[lexicon]
# Optional tab-separated lexicon merged over the built-in one
# path = "lexicon.txt"

[lexicon.entries]
# meh = -0.5

[output]
default_format = "terminal"
"#;
