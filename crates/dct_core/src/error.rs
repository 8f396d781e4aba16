use thiserror::Error;

/// Errors that can occur when compiling a secret detection pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern's regular expression failed to compile.
    #[error("invalid regex in pattern '{name}': {source}")]
    InvalidRegex {
        /// Name of the pattern that failed (e.g. `"AWS Access Key ID"`).
        name: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A user pattern declared a flag other than `i` or `m`.
    #[error("unknown flag '{flag}' in pattern '{name}' (expected 'i' or 'm')")]
    UnknownFlag {
        /// Name of the pattern carrying the flag.
        name: String,
        /// The unrecognised flag character.
        flag: char,
    },

    /// A user pattern is missing a required field.
    #[error("pattern '{name}' is missing required field '{field}'")]
    MissingField {
        /// Name of the incomplete pattern.
        name: String,
        /// The absent field.
        field: &'static str,
    },
}

impl PatternError {
    /// Returns the name of the pattern this error refers to.
    #[must_use]
    pub fn pattern_name(&self) -> &str {
        match self {
            Self::InvalidRegex { name, .. } | Self::UnknownFlag { name, .. } | Self::MissingField { name, .. } => name,
        }
    }
}

/// Top-level error type for the dont-commit-that scanning pipeline.
///
/// Unifies errors from pattern compilation, configuration loading, and
/// suppression store operations into a single type for callers that
/// orchestrate the full workflow.
#[derive(Debug, Error)]
pub enum DctError {
    /// A pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Configuration could not be read, parsed, or written.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// A suppression store file could not be loaded or saved.
    #[error(transparent)]
    Store(#[from] crate::ignore::StoreError),
}
