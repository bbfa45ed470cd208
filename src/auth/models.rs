use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::MemberResponse;

/// JWT token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,   // Subject (member id)
    pub email: String, // Member email
    pub exp: usize,    // Expiration time
    pub iat: usize,    // Issued at
    pub jti: String,   // JWT ID (for revocation)
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: usize,
    pub member: MemberResponse,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Authenticated member session carried through request extensions
#[derive(Debug, Clone)]
pub struct MemberSession {
    pub member_id: Uuid,
    pub email: String,
    pub jti: String,
}

impl MemberSession {
    pub fn from_claims(claims: &Claims) -> Result<Self, uuid::Error> {
        Ok(Self {
            member_id: Uuid::parse_str(&claims.sub)?,
            email: claims.email.clone(),
            jti: claims.jti.clone(),
        })
    }
}
