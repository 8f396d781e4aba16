//! Slack secret patterns.

crate::declare_provider!(
    SlackProvider,
    id: "messaging/slack",
    name: "Slack",
    group: Group::Messaging,
    patterns: [
        crate::pattern! {
                name: "Slack Token",
                group: Group::Messaging,
                description: "Bot, app, personal, refresh, or session token.",
                severity: Severity::High,
                confidence: 0.9,
                regex: r"xox[baprs]-[A-Za-z0-9-]{10,48}",
                case_insensitive: false,
                multi_line: false,
                keywords: &["xox"],
            },
    ],
);
