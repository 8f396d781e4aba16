//! Google Cloud secret patterns.

crate::declare_provider!(
    GcpProvider,
    id: "cloud/gcp",
    name: "Google Cloud Platform",
    group: Group::Cloud,
    patterns: [
        crate::pattern! {
                name: "Google API Key",
                group: Group::Cloud,
                description: "Grants access to Google APIs enabled for the project.",
                severity: Severity::High,
                confidence: 0.9,
                regex: r"AIza[0-9A-Za-z\-_]{35}",
                case_insensitive: false,
                multi_line: false,
                keywords: &["AIza"],
            },
    ],
);
