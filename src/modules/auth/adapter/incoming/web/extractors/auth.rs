use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::{
    domain::entities::Principal, ports::outgoing::token_provider::TokenProvider,
};
use crate::shared::api::ApiResponse;

/// Caller holding a valid access token, any role.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub principal: Principal,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Caller holding a valid access token with the admin role.
///
/// Extracted before the body and query of write handlers, so non-admins get
/// 403 whatever they sent.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub principal: Principal,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(|principal| AuthenticatedUser { principal }))
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let principal = match authenticate(req) {
            Ok(principal) => principal,
            Err(e) => return ready(Err(e)),
        };

        if !principal.is_admin() {
            tracing::warn!(
                username = %principal.username,
                role = %principal.role,
                path = %req.path(),
                "Rejected write by non-admin"
            );
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "FORBIDDEN",
                "Forbidden access",
            ))));
        }

        ready(Ok(AdminUser { principal }))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Principal, ActixError> {
    let jwt_service =
        match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
            Some(service) => service,
            None => {
                tracing::error!("TokenProvider is not registered as app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            }
        };

    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "not logged in",
        ))
    })?;

    match jwt_service.verify_token(&token) {
        Ok(claims) => {
            if claims.token_type != "access" {
                tracing::warn!(token_type = %claims.token_type, "Rejected non-access token");
                return Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                )));
            }

            Ok(claims.into_principal())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejected bearer token");
            Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
