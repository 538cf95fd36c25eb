//! 호출자 범위 (Caller Scope)
//!
//! 클라이언트 토큰의 테넌트 클레임, 사용자 토큰의 사용자 클레임, 요청 로케일을
//! 하나의 값 객체로 묶습니다. 모든 서비스 연산은 이 값을 명시적으로 받으며
//! 전역 상태에서 테넌트를 읽지 않습니다.

use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use crate::core::errors::AppError;
use crate::core::locale::Locale;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallerScope {
    /// 클라이언트 토큰에서 추출한 테넌트 계정 uuid
    pub tenant: String,
    /// 사용자 토큰에서 추출한 사용자 uuid
    pub user: String,
    pub locale: Locale,
}

impl CallerScope {
    pub fn new(tenant: impl Into<String>, user: impl Into<String>, locale: Locale) -> Self {
        Self {
            tenant: tenant.into(),
            user: user.into(),
            locale,
        }
    }

    /// 테넌트 범위를 반환합니다.
    ///
    /// 클레임이 비어 있으면 어떤 테넌트에도 속하지 않으므로 `AccessDenied`입니다.
    pub fn tenant(&self) -> Result<&str, AppError> {
        if self.tenant.trim().is_empty() {
            return Err(AppError::AccessDenied("empty tenant scope".to_string()));
        }
        Ok(&self.tenant)
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

/// 미들웨어가 Request Extensions에 넣어 둔 범위를 꺼냅니다.
impl FromRequest for CallerScope {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<CallerScope>() {
            Some(scope) => ready(Ok(scope.clone())),
            None => ready(Err(AppError::AccessDenied(
                "caller scope missing from request".to_string(),
            ))),
        }
    }
}
