//! Generic token assignment patterns.

crate::declare_provider!(
    GenericTokenProvider,
    id: "generic/token",
    name: "Generic Tokens",
    group: Group::Generic,
    patterns: [
        crate::pattern! {
                name: "Generic Token",
                group: Group::Generic,
                description: "token / access_token / auth_token assignment.",
                severity: Severity::Medium,
                confidence: 0.7,
                regex: r#"(token|access_token|auth_token)[^a-zA-Z0-9]{0,10}['"]?[a-z0-9_\-]{16,64}['"]?"#,
                case_insensitive: true,
                multi_line: false,
                keywords: &["token"],
            },
    ],
);
