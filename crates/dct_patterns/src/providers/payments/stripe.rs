//! Stripe secret patterns.

crate::declare_provider!(
    StripeProvider,
    id: "payments/stripe",
    name: "Stripe",
    group: Group::Payments,
    patterns: [
        crate::pattern! {
                name: "Stripe API Key",
                group: Group::Payments,
                description: "Secret key for live or test mode charges.",
                severity: Severity::High,
                confidence: 0.9,
                regex: r"sk_(live|test)_[0-9a-zA-Z]{24,}",
                case_insensitive: false,
                multi_line: false,
                keywords: &["sk_live_", "sk_test_"],
            },
    ],
);
