//! Provider registry for accessing all builtin providers.

use crate::pattern::PatternDef;
use crate::provider::Provider;
use crate::providers::builtin_providers;

/// Central registry of all builtin secret detection providers.
///
/// Yields pattern definitions in the fixed catalog order used for scan
/// precedence.
pub struct ProviderRegistry {
    providers: Vec<&'static dyn Provider>,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.len())
            .finish()
    }
}

impl ProviderRegistry {
    /// Creates a registry pre-loaded with all builtin providers.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            providers: builtin_providers(),
        }
    }

    /// Returns an iterator over every pattern definition across all providers,
    /// in catalog order.
    pub fn all_patterns(&self) -> impl Iterator<Item = &PatternDef> {
        self.providers.iter().flat_map(|p| p.patterns().iter())
    }

    /// Returns the total number of patterns across all providers.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.providers.iter().map(|p| p.patterns().len()).sum()
    }

    /// Looks up a pattern definition by its unique name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PatternDef> {
        self.all_patterns().find(|p| p.name == name)
    }

    /// Returns the registered providers.
    #[must_use]
    pub fn providers(&self) -> &[&'static dyn Provider] {
        &self.providers
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::pattern::Severity;

    #[test]
    fn builtin_has_nineteen_patterns() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(registry.pattern_count(), 19);
    }

    #[test]
    fn pattern_names_are_unique() {
        let registry = ProviderRegistry::builtin();
        let names: HashSet<&str> = registry.all_patterns().map(|p| p.name).collect();
        assert_eq!(names.len(), registry.pattern_count());
    }

    #[test]
    fn catalog_order_starts_with_private_keys_and_ends_with_dotenv() {
        let registry = ProviderRegistry::builtin();
        let names: Vec<&str> = registry.all_patterns().map(|p| p.name).collect();

        assert_eq!(names.first().copied(), Some("RSA Private Key"));
        assert_eq!(names.last().copied(), Some(".env Secret"));
    }

    #[test]
    fn specific_patterns_precede_generic_heuristics() {
        let registry = ProviderRegistry::builtin();
        let names: Vec<&str> = registry.all_patterns().map(|p| p.name).collect();

        let aws = names.iter().position(|&n| n == "AWS Access Key ID");
        let generic = names.iter().position(|&n| n == "Generic Secret");
        assert!(aws < generic);
    }

    #[test]
    fn catalog_order_is_fixed() {
        let registry = ProviderRegistry::builtin();
        let names: Vec<&str> = registry.all_patterns().map(|p| p.name).collect();

        let expected = [
            "RSA Private Key",
            "OpenSSH Private Key",
            "PGP Private Key",
            "Private Key (Generic)",
            "AWS Access Key ID",
            "AWS Secret Access Key",
            "Google API Key",
            "JWT Token",
            "Bearer Token",
            "GitHub Token",
            "GitLab Access Token",
            "Slack Token",
            "Stripe API Key",
            "Twilio API Key",
            "Facebook Access Token",
            "Generic Token",
            "Generic API Key",
            "Generic Secret",
            ".env Secret",
        ];
        assert_eq!(names, expected);
    }

    #[test]
    fn get_finds_pattern_by_exact_name() {
        let registry = ProviderRegistry::builtin();
        let pattern = registry.get("AWS Access Key ID");
        assert!(pattern.is_some());
        assert_eq!(pattern.map(|p| p.severity), Some(Severity::High));
    }

    #[test]
    fn get_returns_none_for_unknown_name() {
        let registry = ProviderRegistry::builtin();
        assert!(registry.get("Nonexistent Pattern").is_none());
    }

    #[test]
    fn private_key_headers_are_critical() {
        let registry = ProviderRegistry::builtin();
        for name in ["RSA Private Key", "OpenSSH Private Key", "PGP Private Key"] {
            let def = registry.get(name);
            assert_eq!(def.map(|p| p.severity), Some(Severity::Critical));
        }
    }
}
