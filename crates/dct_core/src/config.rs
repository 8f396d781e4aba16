use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;
use crate::pattern::{self, Group, Origin, Pattern, Severity};

fn default_confidence() -> f64 {
    0.5
}

/// Project-level configuration loaded from `.dct.toml`.
///
/// Controls severity thresholds, file exclusions, the suppression store
/// location, and user pattern overrides. All fields are optional and default
/// to permissive values (scan everything, built-in patterns only).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Minimum severity level to report. Findings below this are filtered out.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Glob patterns for file paths to exclude from scanning.
    #[serde(default)]
    pub exclude_paths: Vec<String>,

    /// Maximum file size in bytes. Files larger than this are skipped.
    #[serde(default)]
    pub max_file_size: Option<u64>,

    /// Path to the suppression store file, relative to the workspace root.
    /// Defaults to [`crate::ignore::IGNORE_FILENAME`].
    #[serde(default)]
    pub ignore_file: Option<String>,

    /// Built-in pattern names to disable (e.g. `".env Secret"`).
    #[serde(default)]
    pub disabled_patterns: Vec<String>,

    /// User-defined secret detection patterns, merged over the built-ins
    /// by name.
    #[serde(default)]
    pub patterns: Vec<UserPattern>,
}

/// A user-defined secret detection pattern declared in `.dct.toml`.
///
/// User patterns are compiled into [`Pattern`] instances at catalog load and
/// participate in scanning alongside the built-ins. A pattern whose name
/// matches a built-in replaces it; invalid entries are skipped with a
/// diagnostic, never fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPattern {
    /// Unique display name; matching a built-in name overrides it.
    pub name: String,
    /// Regular expression source used to match secrets.
    pub regex: String,
    /// Regex flags: `i` (case-insensitive) and/or `m` (multiline).
    #[serde(default)]
    pub flags: String,
    /// Severity assigned to findings from this pattern.
    pub severity: Severity,
    /// How likely a match is to be a real secret, in `[0, 1]`.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Optional longer description. Falls back to `name` if absent.
    #[serde(default)]
    pub description: Option<String>,
    /// Aho-Corasick pre-filter keywords. Empty means the pattern always runs.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl UserPattern {
    /// Compiles this definition into a `Pattern` ready for scanning.
    ///
    /// Returns an error for an empty name or regex, an unknown flag
    /// character, or a regex that fails to compile.
    pub fn compile(&self) -> Result<Pattern, PatternError> {
        if self.name.is_empty() {
            return Err(PatternError::MissingField {
                name: "<unnamed>".to_string(),
                field: "name",
            });
        }
        if self.regex.is_empty() {
            return Err(PatternError::MissingField {
                name: self.name.clone(),
                field: "regex",
            });
        }

        let (case_insensitive, multi_line) = self.parse_flags()?;
        let regex = pattern::compile_regex(&self.name, &self.regex, case_insensitive, multi_line)?;

        Ok(Pattern {
            name: Arc::from(self.name.as_str()),
            group: Group::Custom,
            description: self
                .description
                .clone()
                .unwrap_or_else(|| self.name.clone())
                .into(),
            severity: self.severity,
            confidence: self.confidence,
            regex,
            keywords: self.keywords.iter().map(|s| s.as_str().into()).collect(),
            origin: Origin::User,
        })
    }

    fn parse_flags(&self) -> Result<(bool, bool), PatternError> {
        let mut case_insensitive = false;
        let mut multi_line = false;

        for flag in self.flags.chars() {
            match flag {
                'i' => case_insensitive = true,
                'm' => multi_line = true,
                other => {
                    return Err(PatternError::UnknownFlag {
                        name: self.name.clone(),
                        flag: other,
                    });
                }
            }
        }

        Ok((case_insensitive, multi_line))
    }
}

impl Config {
    /// Creates a default configuration with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a `.dct.toml` file.
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = read_file(path)?;
        parse_toml(path, &content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Atomically writes this configuration to a `.dct.toml` file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serialise_toml(self)?;
        write_file(path, &content)
    }

    /// Serialises this configuration to a pretty-printed TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        serialise_toml(self)
    }

    /// Returns the configured suppression store path, or the default.
    #[must_use]
    pub fn ignore_file_path(&self) -> &Path {
        self.ignore_file
            .as_deref()
            .map_or(Path::new(crate::ignore::IGNORE_FILENAME), Path::new)
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), ConfigError> {
    crate::fs_util::atomic_write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_toml(path: &Path, content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn serialise_toml(config: &Config) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|source| ConfigError::Serialize { source })
}

/// Errors that can occur when reading, parsing, serialising, or writing
/// a `.dct.toml` configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path to the config file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be written to disk.
    #[error("failed to write config '{path}': {source}")]
    Write {
        /// Path to the config file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid TOML.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        /// Path to the config file that could not be parsed.
        path: PathBuf,
        /// The underlying TOML parse error.
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be serialised to TOML.
    #[error("failed to serialise config: {source}")]
    Serialize {
        /// The underlying TOML serialisation error.
        #[source]
        source: toml::ser::Error,
    },
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn user_pattern(name: &str, regex: &str, flags: &str) -> UserPattern {
        UserPattern {
            name: name.to_string(),
            regex: regex.to_string(),
            flags: flags.to_string(),
            severity: Severity::High,
            confidence: 0.9,
            description: None,
            keywords: Vec::new(),
        }
    }

    #[test]
    fn default_config_has_no_overrides() {
        let config = Config::new();
        assert!(config.severity.is_none());
        assert!(config.patterns.is_empty());
        assert!(config.disabled_patterns.is_empty());
    }

    #[test]
    fn load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert!(config.patterns.is_empty());
    }

    #[test]
    fn from_toml_parses_user_patterns() {
        let config = Config::from_toml(
            r#"
severity = "medium"
exclude_paths = ["target/**"]

[[patterns]]
name = "Acme License Key"
regex = 'ACME-[0-9A-F]{24}'
severity = "high"
confidence = 0.9
"#,
        )
        .unwrap();

        assert_eq!(config.severity, Some(Severity::Medium));
        assert_eq!(config.exclude_paths, vec!["target/**"]);
        assert_eq!(config.patterns.len(), 1);
        assert_eq!(config.patterns[0].name, "Acme License Key");
    }

    #[test]
    fn from_toml_rejects_invalid_toml() {
        assert!(Config::from_toml("not = [valid").is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".dct.toml");

        let mut config = Config::new();
        config.severity = Some(Severity::High);
        config.patterns.push(user_pattern("Acme License Key", "ACME-[0-9A-F]{24}", ""));
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.severity, Some(Severity::High));
        assert_eq!(loaded.patterns.len(), 1);
    }

    #[test]
    fn user_pattern_compiles_with_flags() {
        let pattern = user_pattern("Acme Key", "^acme-[a-z0-9]+$", "im").compile().unwrap();

        assert_eq!(pattern.origin, Origin::User);
        assert_eq!(pattern.group, Group::Custom);
        assert!(pattern.regex.is_match("ACME-ABC123"));
        assert!(pattern.regex.is_match("prefix\nacme-xyz"));
    }

    #[test]
    fn user_pattern_rejects_unknown_flag() {
        let result = user_pattern("Acme Key", "acme", "g").compile();

        assert!(matches!(
            result,
            Err(PatternError::UnknownFlag { flag: 'g', .. })
        ));
    }

    #[test]
    fn user_pattern_rejects_invalid_regex() {
        let result = user_pattern("Broken", "([unclosed", "").compile();

        assert!(matches!(result, Err(PatternError::InvalidRegex { .. })));
    }

    #[test]
    fn user_pattern_rejects_missing_fields() {
        assert!(matches!(
            user_pattern("", "acme", "").compile(),
            Err(PatternError::MissingField { field: "name", .. })
        ));
        assert!(matches!(
            user_pattern("Acme", "", "").compile(),
            Err(PatternError::MissingField { field: "regex", .. })
        ));
    }

    #[test]
    fn user_pattern_confidence_defaults_to_half() {
        let config = Config::from_toml(
            r#"
[[patterns]]
name = "Acme License Key"
regex = 'ACME-[0-9A-F]{24}'
severity = "low"
"#,
        )
        .unwrap();

        assert!((config.patterns[0].confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn ignore_file_path_defaults_to_workspace_filename() {
        let config = Config::new();
        assert_eq!(
            config.ignore_file_path(),
            Path::new(crate::ignore::IGNORE_FILENAME)
        );

        let mut custom = Config::new();
        custom.ignore_file = Some(".config/dct-ignore.json".to_string());
        assert_eq!(custom.ignore_file_path(), Path::new(".config/dct-ignore.json"));
    }
}
