//! Payment processor secret patterns.

mod stripe;

pub use stripe::StripeProvider;
