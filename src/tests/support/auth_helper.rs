#[cfg(test)]
pub mod test_helpers {
    use actix_web::web;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::domain::entities::{Principal, Role};
    use crate::auth::application::ports::outgoing::token_provider::{TokenClaims, TokenProvider};

    pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
    pub const TEST_ISSUER: &str = "faq-backend";

    pub fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            issuer: TEST_ISSUER.to_string(),
            secret_key: TEST_SECRET.to_string(),
        })
    }

    /// App data the auth extractors look up.
    pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
        web::Data::new(provider)
    }

    pub fn admin_principal() -> Principal {
        Principal::new(Uuid::new_v4(), "faq-admin", Role::Admin)
    }

    pub fn member_principal() -> Principal {
        Principal::new(Uuid::new_v4(), "reader", Role::Member)
    }

    /// Signs a token the way the identity service does.
    pub fn sign_token(
        secret: &str,
        issuer: &str,
        principal: &Principal,
        token_type: &str,
        expiry_seconds: i64,
    ) -> String {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: principal.id,
            username: principal.username.clone(),
            role: principal.role.as_str().to_string(),
            iss: issuer.to_string(),
            exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: token_type.to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("test token should encode")
    }

    pub fn token_for(principal: &Principal) -> String {
        sign_token(TEST_SECRET, TEST_ISSUER, principal, "access", 3600)
    }

    /// `Authorization` header tuple for `TestRequest::insert_header`.
    pub fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token))
    }
}
