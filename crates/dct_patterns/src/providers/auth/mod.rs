//! Request authentication token patterns.

mod bearer;
mod jwt;

pub use bearer::BearerProvider;
pub use jwt::JwtProvider;
