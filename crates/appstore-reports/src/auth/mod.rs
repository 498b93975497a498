//! Credentials: `.p8` key loading and ES256 token signing.

mod private_key;
mod token;

pub use private_key::{EcSigningKey, PrivateKeyLoader};
pub use token::{AuthToken, Claims, TokenBuilder, TokenStore};
