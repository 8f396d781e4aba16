//! Facebook secret patterns.

crate::declare_provider!(
    FacebookProvider,
    id: "social/facebook",
    name: "Facebook",
    group: Group::Social,
    patterns: [
        crate::pattern! {
                name: "Facebook Access Token",
                group: Group::Social,
                description: "Graph API access token.",
                severity: Severity::High,
                confidence: 0.85,
                regex: r"EAACEdEose0cBA[0-9A-Za-z]+",
                case_insensitive: false,
                multi_line: false,
                keywords: &["EAACEdEose0cBA"],
            },
    ],
);
