//! Pattern definition types for secret detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid severity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
    invalid_value: Box<str>,
}

impl ParseSeverityError {
    fn new(value: &str) -> Self {
        Self {
            invalid_value: value.into(),
        }
    }

    /// Returns the invalid value that caused the parse failure.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid severity '{}': expected one of 'low', 'medium', 'high', 'critical'",
            self.invalid_value
        )
    }
}

impl std::error::Error for ParseSeverityError {}

/// How severe a detected secret exposure is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Low risk - the match is likely configuration noise or a weak credential.
    Low,
    /// Medium risk - the secret could grant partial access.
    Medium,
    /// High risk - the secret grants broad access to sensitive resources.
    High,
    /// Critical risk - the secret grants full administrative access.
    Critical,
}

impl Severity {
    /// All severity levels in ascending order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseSeverityError::new(s)),
        }
    }
}

/// Logical grouping of patterns by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Authentication tokens carried in requests (JWT, bearer).
    Auth,
    /// Cloud provider API keys and service credentials.
    Cloud,
    /// User-defined patterns from `.dct.toml` configuration.
    Custom,
    /// Fallback heuristic for `.env`-style `NAME=value` lines.
    Dotenv,
    /// Heuristic `token=` / `secret=` / `api_key=` style assignments.
    Generic,
    /// Private key material (PEM headers).
    Keys,
    /// Messaging platform tokens.
    Messaging,
    /// Payment processor API keys.
    Payments,
    /// Social platform access tokens.
    Social,
    /// Version control system tokens.
    Vcs,
}

impl Group {
    /// Returns the human-readable display name for this group.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auth => "Authentication Tokens",
            Self::Cloud => "Cloud Providers",
            Self::Custom => "Custom Patterns",
            Self::Dotenv => "Dotenv Assignments",
            Self::Generic => "Generic Secrets",
            Self::Keys => "Private Keys",
            Self::Messaging => "Messaging Platforms",
            Self::Payments => "Payment Processors",
            Self::Social => "Social Platforms",
            Self::Vcs => "Version Control Systems",
        }
    }

    /// Returns the lowercase string identifier used in listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Cloud => "cloud",
            Self::Custom => "custom",
            Self::Dotenv => "dotenv",
            Self::Generic => "generic",
            Self::Keys => "keys",
            Self::Messaging => "messaging",
            Self::Payments => "payments",
            Self::Social => "social",
            Self::Vcs => "vcs",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single pattern definition for detecting a specific type of secret.
#[derive(Debug, Clone)]
pub struct PatternDef {
    /// Unique display name, the sole pattern identity (e.g. `"AWS Access Key ID"`).
    pub name: &'static str,
    /// The category this pattern belongs to.
    pub group: Group,
    /// Longer description of what this pattern detects.
    pub description: &'static str,
    /// How severe an exposure of this secret type is.
    pub severity: Severity,
    /// How likely a match is to be a real secret, in `[0, 1]`.
    pub confidence: f64,
    /// The regular expression used to match this secret.
    pub regex: &'static str,
    /// Whether the regex is compiled case-insensitively.
    pub case_insensitive: bool,
    /// Whether `^`/`$` match at line boundaries.
    pub multi_line: bool,
    /// Keywords for Aho-Corasick pre-filtering. Empty means the pattern
    /// always runs.
    pub keywords: &'static [&'static str],
}

/// Creates a `PatternDef` from named fields.
#[macro_export]
macro_rules! pattern {
    (
        name: $name:expr,
        group: $group:expr,
        description: $description:expr,
        severity: $severity:expr,
        confidence: $confidence:expr,
        regex: $regex:expr,
        case_insensitive: $ci:expr,
        multi_line: $ml:expr,
        keywords: $keywords:expr $(,)?
    ) => {
        $crate::PatternDef {
            name: $name,
            group: $group,
            description: $description,
            severity: $severity,
            confidence: $confidence,
            regex: $regex,
            case_insensitive: $ci,
            multi_line: $ml,
            keywords: $keywords,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_low_to_critical() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn severity_display_formats_as_lowercase() {
        assert_eq!(format!("{}", Severity::Low), "low");
        assert_eq!(format!("{}", Severity::Critical), "critical");
    }

    #[test]
    fn severity_from_str_is_case_insensitive() {
        assert_eq!(Severity::from_str("LOW"), Ok(Severity::Low));
        assert_eq!(Severity::from_str("Critical"), Ok(Severity::Critical));
    }

    #[test]
    fn severity_from_str_returns_error_for_invalid_value() {
        let result = Severity::from_str("extreme");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert_eq!(err.invalid_value(), "extreme");
        assert!(err.to_string().contains("extreme"));
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn parse_severity_error_implements_std_error() {
        let err = ParseSeverityError::new("bad");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn group_as_str_is_lowercase() {
        assert_eq!(Group::Vcs.as_str(), "vcs");
        assert_eq!(Group::Keys.as_str(), "keys");
    }

    #[test]
    fn group_name_is_human_readable() {
        assert_eq!(Group::Vcs.name(), "Version Control Systems");
        assert_eq!(Group::Dotenv.name(), "Dotenv Assignments");
    }
}
