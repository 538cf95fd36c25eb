use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderMap, ACCEPT_LANGUAGE, AUTHORIZATION};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::config::ClaimConfig;
use crate::core::{AppError, Locale};
use crate::domain::dto::ApiResponse;
use crate::domain::models::CallerScope;
use crate::services::auth::TokenService;

pub const CLIENT_TOKEN_HEADER: &str = "Client-Token";

pub struct CallerScopeMiddlewareService<S> {
    pub service: Rc<S>,
    pub token_service: Rc<TokenService>,
    pub claims: Rc<ClaimConfig>,
}

impl<S, B> Service<ServiceRequest> for CallerScopeMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();
        let claims = self.claims.clone();

        Box::pin(async move {
            let locale = request_locale(req.headers());

            match resolve_scope(req.headers(), &token_service, &claims) {
                Ok(scope) => {
                    log::debug!("caller scope resolved: tenant={} user={}", scope.tenant, scope.user);
                    req.extensions_mut().insert(scope);
                }
                Err(err) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    let response = HttpResponse::build(err.status())
                        .json(ApiResponse::<()>::failure(&err, locale));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

pub fn request_locale(headers: &HeaderMap) -> Locale {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|h| h.to_str().ok())
        .map(Locale::from_header)
        .unwrap_or_default()
}

/// 헤더의 두 토큰을 검증해 호출자 범위를 만듭니다.
pub fn resolve_scope(
    headers: &HeaderMap,
    token_service: &TokenService,
    claims: &ClaimConfig,
) -> Result<CallerScope, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AccessDenied("missing Authorization header".to_string()))?;

    let user_token = token_service.extract_bearer_token(auth_header)?;
    let user_claims = token_service.verify(user_token)?;

    let client_token = headers
        .get(CLIENT_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::AccessDenied("missing Client-Token header".to_string()))?;
    let client_claims = token_service.verify(client_token)?;

    Ok(CallerScope::new(
        TokenService::claim(&client_claims, &claims.client_scope).unwrap_or_default(),
        TokenService::claim(&user_claims, &claims.user_scope).unwrap_or_default(),
        request_locale(headers),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderName, HeaderValue};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "middleware-secret";

    fn token(claims: serde_json::Value) -> String {
        encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
    }

    fn headers(pairs: &[(&'static str, String)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                HeaderName::from_static(name),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_scope_from_both_tokens() {
        let map = headers(&[
            ("authorization", format!("Bearer {}", token(json!({ "user_uuid": "u-1" })))),
            ("client-token", token(json!({ "quiz": "acnt-1" }))),
            ("accept-language", "fa".to_string()),
        ]);

        let scope = resolve_scope(&map, &TokenService::new(SECRET), &ClaimConfig::default()).unwrap();

        assert_eq!(scope, CallerScope::new("acnt-1", "u-1", Locale::Fa));
    }

    #[test]
    fn test_missing_claim_gives_empty_tenant() {
        let map = headers(&[
            ("authorization", format!("Bearer {}", token(json!({ "user_uuid": "u-1" })))),
            ("client-token", token(json!({ "other": "x" }))),
        ]);

        let scope = resolve_scope(&map, &TokenService::new(SECRET), &ClaimConfig::default()).unwrap();

        assert!(scope.tenant().is_err());
        assert_eq!(scope.locale, Locale::En);
    }

    #[test]
    fn test_missing_or_invalid_tokens_are_denied() {
        let service = TokenService::new(SECRET);
        let claims = ClaimConfig::default();

        let no_client = headers(&[(
            "authorization",
            format!("Bearer {}", token(json!({ "user_uuid": "u-1" }))),
        )]);
        assert!(matches!(resolve_scope(&no_client, &service, &claims), Err(AppError::AccessDenied(_))));

        let bad_user = headers(&[
            ("authorization", "Bearer not-a-token".to_string()),
            ("client-token", token(json!({ "quiz": "acnt-1" }))),
        ]);
        assert!(resolve_scope(&bad_user, &service, &claims).is_err());

        assert!(resolve_scope(&HeaderMap::new(), &service, &claims).is_err());
    }
}
