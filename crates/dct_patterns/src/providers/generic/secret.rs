//! Generic secret assignment patterns.

crate::declare_provider!(
    GenericSecretProvider,
    id: "generic/secret",
    name: "Generic Secrets",
    group: Group::Generic,
    patterns: [
        crate::pattern! {
                name: "Generic Secret",
                group: Group::Generic,
                description: "secret / client_secret / private_key assignment.",
                severity: Severity::Medium,
                confidence: 0.7,
                regex: r#"(secret|client_secret|private_key)[^a-zA-Z0-9]{0,10}['"]?[a-z0-9_\-]{16,64}['"]?"#,
                case_insensitive: true,
                multi_line: false,
                keywords: &["secret", "private_key"],
            },
    ],
);
