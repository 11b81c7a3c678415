//! Session token management for the HTTP layer

mod jwt;

pub use jwt::{JwtClaims, JwtConfig, JwtGenerator, JwtService};
