//! Builtin providers for secret detection.

mod auth;
mod cloud;
mod dotenv;
mod generic;
mod keys;
mod messaging;
mod payments;
mod social;
mod vcs;

use crate::provider::Provider;

/// Returns all builtin providers in catalog order.
///
/// The order here is the scan precedence order: the first pattern whose
/// match claims a line wins, so specific providers come before the generic
/// heuristics and the dotenv fallback comes last. Do not reorder.
#[must_use]
pub fn builtin_providers() -> Vec<&'static dyn Provider> {
    vec![
        &keys::KeysProvider,
        &cloud::AwsProvider,
        &cloud::GcpProvider,
        &auth::JwtProvider,
        &auth::BearerProvider,
        &vcs::GitHubProvider,
        &vcs::GitLabProvider,
        &messaging::SlackProvider,
        &payments::StripeProvider,
        &messaging::TwilioProvider,
        &social::FacebookProvider,
        &generic::GenericTokenProvider,
        &generic::GenericApiKeyProvider,
        &generic::GenericSecretProvider,
        &dotenv::DotenvProvider,
    ]
}
