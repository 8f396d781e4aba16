//! Cloud provider secret patterns.

mod aws;
mod gcp;

pub use aws::AwsProvider;
pub use gcp::GcpProvider;
