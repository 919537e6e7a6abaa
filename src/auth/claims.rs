use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload of a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,     // user ID
    pub email: String, // email at login time
    pub iat: usize,    // issued at (unix timestamp)
    pub exp: usize,    // expires at (unix timestamp)
    pub iss: String,   // issuer
    pub aud: String,   // audience
}
