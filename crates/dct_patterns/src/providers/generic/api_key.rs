//! Generic API key assignment patterns.

crate::declare_provider!(
    GenericApiKeyProvider,
    id: "generic/api-key",
    name: "Generic API Keys",
    group: Group::Generic,
    patterns: [
        crate::pattern! {
                name: "Generic API Key",
                group: Group::Generic,
                description: "api_key / api-key / apikey assignment.",
                severity: Severity::Medium,
                confidence: 0.7,
                regex: r#"(api[_-]?key|apikey)[^a-zA-Z0-9]{0,10}['"]?[a-z0-9_\-]{16,64}['"]?"#,
                case_insensitive: true,
                multi_line: false,
                keywords: &["api"],
            },
    ],
);
