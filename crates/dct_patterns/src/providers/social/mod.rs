//! Social platform secret patterns.

mod facebook;

pub use facebook::FacebookProvider;
