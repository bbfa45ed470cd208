use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::auth::{
    AuthError, AuthResponse, JwtService, LoginRequest, MemberSession, MessageResponse,
    RefreshTokenRequest, TokenResponse,
};
use crate::services::GymService;

/// Issues and revokes tokens against the gym directory.
///
/// Refresh tokens and the logout blacklist live in memory next to the
/// directory itself; only a hash of each refresh token is kept.
#[derive(Debug, Clone)]
pub struct AuthService {
    jwt_service: JwtService,
    gym: GymService,
    refresh_tokens: Arc<RwLock<HashMap<String, Uuid>>>,
    blacklist: Arc<RwLock<HashSet<String>>>,
}

impl AuthService {
    pub fn new(gym: GymService, jwt_secret: &str) -> Self {
        Self {
            jwt_service: JwtService::new(jwt_secret),
            gym,
            refresh_tokens: Arc::new(RwLock::new(HashMap::new())),
            blacklist: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Login member
    pub fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        let member = self
            .gym
            .authenticate(&request.email, &request.password)
            .ok_or(AuthError::InvalidCredentials)?;

        let (access_token, refresh_token) =
            self.jwt_service.create_token_pair(member.id, &member.email)?;
        self.store_refresh_token(member.id, &refresh_token);

        Ok(AuthResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_service.access_token_expires_in_seconds(),
            member: member.into(),
        })
    }

    /// Exchange a valid refresh token for a fresh access token
    pub fn refresh_token(&self, request: RefreshTokenRequest) -> Result<TokenResponse, AuthError> {
        let claims = self.jwt_service.validate_token(&request.refresh_token)?;

        let member_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;
        if !self.is_refresh_token_valid(member_id, &request.refresh_token) {
            return Err(AuthError::InvalidToken);
        }

        let access_token = self
            .jwt_service
            .create_access_token(member_id, &claims.email)?;

        Ok(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_service.access_token_expires_in_seconds(),
        })
    }

    /// Logout member: blacklist the access token and revoke the member's
    /// refresh tokens
    pub fn logout(&self, token: &str) -> Result<MessageResponse, AuthError> {
        let jti = self.jwt_service.extract_jti(token)?;
        let claims = self.jwt_service.validate_token(token)?;
        let member_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

        self.blacklist.write().unwrap().insert(jti);
        self.refresh_tokens
            .write()
            .unwrap()
            .retain(|_, owner| *owner != member_id);

        Ok(MessageResponse {
            message: "Successfully logged out".to_string(),
        })
    }

    /// Validate member session from token
    pub fn validate_session(&self, token: &str) -> Result<MemberSession, AuthError> {
        let session = self.jwt_service.extract_member_session(token)?;

        if self.blacklist.read().unwrap().contains(&session.jti) {
            return Err(AuthError::InvalidToken);
        }

        Ok(session)
    }

    fn store_refresh_token(&self, member_id: Uuid, refresh_token: &str) {
        self.refresh_tokens
            .write()
            .unwrap()
            .insert(token_hash(refresh_token), member_id);
    }

    fn is_refresh_token_valid(&self, member_id: Uuid, refresh_token: &str) -> bool {
        self.refresh_tokens
            .read()
            .unwrap()
            .get(&token_hash(refresh_token))
            .is_some_and(|owner| *owner == member_id)
    }
}

fn token_hash(token: &str) -> String {
    format!("{:x}", md5::compute(token))
}
