//! Signed-token lifecycle: claims, issuance, verification, rotation

mod claims;
mod manager;
mod revocation;

pub use claims::{Claims, TokenPair, TokenType};
pub use manager::{TokenManager, DEFAULT_ACCESS_TOKEN_EXPIRY, DEFAULT_REFRESH_TOKEN_EXPIRY};
pub use revocation::{NoRevocation, RevocationCheck};
