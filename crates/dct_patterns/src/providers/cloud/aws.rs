//! AWS secret patterns.

crate::declare_provider!(
    AwsProvider,
    id: "cloud/aws",
    name: "Amazon Web Services",
    group: Group::Cloud,
    patterns: [
        crate::pattern! {
                name: "AWS Access Key ID",
                group: Group::Cloud,
                description: "Identifies the key pair but requires the secret key for access.",
                severity: Severity::High,
                confidence: 0.9,
                regex: r"AKIA[0-9A-Z]{16}",
                case_insensitive: false,
                multi_line: false,
                keywords: &["AKIA"],
            },
            crate::pattern! {
                name: "AWS Secret Access Key",
                group: Group::Cloud,
                description: "Grants full signing access for the paired key ID.",
                severity: Severity::Critical,
                confidence: 0.95,
                regex: r"aws(.{0,20})?(secret|private)[^a-z0-9]{0,10}[a-z0-9/+=]{40}",
                case_insensitive: true,
                multi_line: false,
                keywords: &["aws"],
            },
    ],
);
