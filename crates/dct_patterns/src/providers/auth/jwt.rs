//! JSON Web Token patterns.

crate::declare_provider!(
    JwtProvider,
    id: "auth/jwt",
    name: "JSON Web Tokens",
    group: Group::Auth,
    patterns: [
        crate::pattern! {
                name: "JWT Token",
                group: Group::Auth,
                description: "Signed JWT with header and payload segments.",
                severity: Severity::High,
                confidence: 0.85,
                regex: r"eyJ[A-Za-z0-9_-]+\.eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+",
                case_insensitive: false,
                multi_line: false,
                keywords: &["eyJ"],
            },
    ],
);
