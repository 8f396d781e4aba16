//! GitHub secret patterns.

crate::declare_provider!(
    GitHubProvider,
    id: "vcs/github",
    name: "GitHub",
    group: Group::Vcs,
    patterns: [
        crate::pattern! {
                name: "GitHub Token",
                group: Group::Vcs,
                description: "Personal access, OAuth, user, server, or refresh token.",
                severity: Severity::High,
                confidence: 0.95,
                regex: r"gh[pousr]_[A-Za-z0-9_]{36,255}",
                case_insensitive: false,
                multi_line: false,
                keywords: &["ghp_", "gho_", "ghu_", "ghs_", "ghr_"],
            },
    ],
);
