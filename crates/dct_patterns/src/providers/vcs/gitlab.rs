//! GitLab secret patterns.

crate::declare_provider!(
    GitLabProvider,
    id: "vcs/gitlab",
    name: "GitLab",
    group: Group::Vcs,
    patterns: [
        crate::pattern! {
                name: "GitLab Access Token",
                group: Group::Vcs,
                description: "Personal access token with API scope.",
                severity: Severity::High,
                confidence: 0.95,
                regex: r"glpat-[A-Za-z0-9\-_]{20,}",
                case_insensitive: false,
                multi_line: false,
                keywords: &["glpat-"],
            },
    ],
);
