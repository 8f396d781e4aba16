//! Bearer authorization header patterns.

crate::declare_provider!(
    BearerProvider,
    id: "auth/bearer",
    name: "Bearer Tokens",
    group: Group::Auth,
    patterns: [
        crate::pattern! {
                name: "Bearer Token",
                group: Group::Auth,
                description: "Opaque token carried in an Authorization header.",
                severity: Severity::High,
                confidence: 0.8,
                regex: r"Bearer\s+[a-zA-Z0-9\-._~+/]+=*",
                case_insensitive: true,
                multi_line: false,
                keywords: &["bearer"],
            },
    ],
);
