//! Fallback heuristic for `.env`-style assignments.

crate::declare_provider!(
    DotenvProvider,
    id: "dotenv",
    name: "Dotenv Assignments",
    group: Group::Dotenv,
    patterns: [
        // No keywords: this pattern runs against every scanned text.
        // Backreference-free rendition of the upstream rule, so mismatched
        // quote pairs are accepted rather than rejected.
        crate::pattern! {
                name: ".env Secret",
                group: Group::Dotenv,
                description: "UPPER_SNAKE assignment with a long opaque value.",
                severity: Severity::Low,
                confidence: 0.6,
                regex: r#"^[A-Z0-9_]+=["']?[A-Za-z0-9_\-/.+=]{12,}["']?$"#,
                case_insensitive: false,
                multi_line: true,
                keywords: &[],
            },
    ],
);
