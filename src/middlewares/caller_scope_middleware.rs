//! # Caller Scope Middleware
//!
//! 요청 헤더의 두 토큰을 검증하고 [`CallerScope`](crate::domain::models::CallerScope)를
//! Request Extensions에 넣습니다.
//!
//! | 헤더 | 내용 | 클레임 |
//! |------|------|--------|
//! | `Authorization: Bearer <token>` | 사용자 토큰 | `USER_SCOPE_CLAIM` → 사용자 |
//! | `Client-Token: <token>` | 클라이언트 토큰 | `CLIENT_SCOPE_CLAIM` → 테넌트 |
//! | `Accept-Language` | `en` / `fa` | 응답 로케일 |
//!
//! 토큰이 없거나 검증에 실패하면 핸들러를 호출하지 않고 `401 ACCESS_DENIED`를 반환합니다.
//! 클레임만 없는 경우에는 빈 값으로 범위를 만들고, 서비스가 `AccessDenied`로 처리합니다.
//!
//! ```rust,ignore
//! web::scope("/api/quiz")
//!     .wrap(CallerScopeMiddleware::new(TokenService::from_env(), ClaimConfig::from_env()))
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::config::ClaimConfig;
use crate::middlewares::caller_scope_inner::CallerScopeMiddlewareService;
use crate::services::auth::TokenService;

pub struct CallerScopeMiddleware {
    token_service: Rc<TokenService>,
    claims: Rc<ClaimConfig>,
}

impl CallerScopeMiddleware {
    pub fn new(token_service: TokenService, claims: ClaimConfig) -> Self {
        Self {
            token_service: Rc::new(token_service),
            claims: Rc::new(claims),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CallerScopeMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CallerScopeMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CallerScopeMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
            claims: self.claims.clone(),
        }))
    }
}
