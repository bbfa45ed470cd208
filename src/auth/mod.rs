// Authentication: bcrypt password handling, JWT issuance and the axum
// middleware that guards member-only routes.

pub mod errors;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;

pub use errors::AuthError;
pub use jwt::{extract_bearer_token, JwtService};
pub use middleware::{
    cors_layer, extract_member_session, jwt_auth_middleware, security_headers_layer,
};
pub use models::{
    AuthResponse, Claims, LoginRequest, MemberSession, MessageResponse, RefreshTokenRequest,
    TokenResponse,
};
pub use service::AuthService;
