use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SentimapConfig;
use super::thresholds::ThresholdsConfig;
use crate::core::errors::Error;

pub const CONFIG_FILE_NAME: &str = ".sentimap.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Keys each section accepts. `[lexicon.entries]` is free-form.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("thresholds", &["neutral_band", "mixed_ceiling"]),
    ("indicators", &["extra", "replace_defaults"]),
    ("lexicon", &["path", "entries"]),
    ("output", &["default_format"]),
];

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from TOML, replacing invalid thresholds with defaults
pub fn parse_and_validate_config(contents: &str) -> Result<SentimapConfig, String> {
    let mut config = toml::from_str::<SentimapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    for key in unknown_keys(contents) {
        log::warn!("Ignoring unknown config key '{}'", key);
    }

    if let Some(thresholds) = config.thresholds {
        if let Err(e) = thresholds.validate() {
            log::warn!("Invalid thresholds: {}. Using defaults.", e);
            config.thresholds = Some(ThresholdsConfig::default());
        }
    }

    Ok(config)
}

/// Parse config from TOML, rejecting anything invalid
pub fn parse_config_strict(contents: &str) -> Result<SentimapConfig, String> {
    let config = toml::from_str::<SentimapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    let unknown = unknown_keys(contents);
    if !unknown.is_empty() {
        return Err(format!("Unknown config keys: {}", unknown.join(", ")));
    }

    if let Some(thresholds) = config.thresholds {
        thresholds
            .validate()
            .map_err(|e| format!("Invalid thresholds: {}", e))?;
    }

    Ok(config)
}

/// Dotted paths of keys outside the config schema, sorted.
pub fn unknown_keys(contents: &str) -> Vec<String> {
    let Ok(table) = toml::from_str::<toml::Table>(contents) else {
        return Vec::new();
    };

    let mut unknown = Vec::new();
    for (section, value) in &table {
        let Some((_, fields)) = KNOWN_KEYS.iter().find(|(name, _)| name == section) else {
            unknown.push(section.clone());
            continue;
        };
        if let Some(inner) = value.as_table() {
            unknown.extend(
                inner
                    .keys()
                    .filter(|key| !fields.contains(&key.as_str()))
                    .map(|key| format!("{}.{}", section, key)),
            );
        }
    }
    unknown
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SentimapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(mut config) => {
            log::debug!("Loaded config from {}", config_path.display());
            if let Some(dir) = config_path.parent() {
                config.resolve_paths(dir);
            }
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> SentimapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SentimapConfig::default()
        })
}

pub fn load_config() -> SentimapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            SentimapConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Failures are errors, not fallbacks.
pub fn load_config_from_path(path: &Path) -> Result<SentimapConfig, Error> {
    let contents = read_config_file(path).map_err(|e| Error::FileSystem {
        message: format!("Failed to read config file {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;

    let mut config = parse_config_strict(&contents).map_err(Error::configuration)?;
    if let Some(dir) = path.parent() {
        config.resolve_paths(dir);
    }
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
