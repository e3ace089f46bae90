use axum::{body::Body, extract::Request, middleware::Next, response::Response};

use crate::shared::api_error::ApiError;

/// Сырой Bearer токен из заголовка запроса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

/// Middleware that requires an `Authorization: Bearer <token>` header.
/// The token is not validated, only passed on to handlers.
pub async fn require_bearer(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?
        .to_string();

    req.extensions_mut().insert(BearerToken(token));

    Ok(next.run(req).await)
}
