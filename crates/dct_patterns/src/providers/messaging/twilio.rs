//! Twilio secret patterns.

crate::declare_provider!(
    TwilioProvider,
    id: "messaging/twilio",
    name: "Twilio",
    group: Group::Messaging,
    patterns: [
        crate::pattern! {
                name: "Twilio API Key",
                group: Group::Messaging,
                description: "API key SID granting programmatic account access.",
                severity: Severity::High,
                confidence: 0.9,
                regex: r"SK[0-9a-fA-F]{32}",
                case_insensitive: false,
                multi_line: false,
                keywords: &["SK"],
            },
    ],
);
