//! # Application Error Handling System
//!
//! 퀴즈 서비스 전역에서 사용하는 에러 분류 체계입니다.
//! 리포지토리 포트가 돌려주는 [`RepoError`](crate::repositories::RepoError)를
//! 서비스 경계에서 [`AppError`]로 변환하고, 딜리버리 계층은 이를
//! 안정적인 머신 코드 + 로케일별 메시지로 렌더링합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | 코드 | HTTP Status |
//! |----------|------|-------------|
//! | `AccessDenied` | `ACCESS_DENIED` | 401 Unauthorized |
//! | `InvalidInput` | `INVALID_INPUT` | 400 Bad Request |
//! | `NotFound` | `NOT_FOUND` | 404 Not Found |
//! | `StorageUnknown` | `UNKNOWN` | 500 Internal Server Error |
//! | `UpdateFailed` | `UPDATE_FAILED` | 500 Internal Server Error |
//! | `RemovalBlocked` | `REMOVAL_BLOCKED` | 409 Conflict |
//! | `RemovalFailed` | `REMOVE_FAILED` | 500 Internal Server Error |
//!
//! ## 내부 정보 노출 정책
//!
//! 각 변형이 들고 있는 문자열은 로그용 상세 정보입니다.
//! HTTP 응답에는 코드와 로케일 메시지만 실리므로 스토리지 내부 에러가
//! 클라이언트로 새어 나가지 않습니다.
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let err = AppError::RemovalBlocked("question q-1 is still attached".to_string());
//! assert_eq!(err.code(), "REMOVAL_BLOCKED");
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use crate::core::locale::Locale;
use crate::repositories::RepoError;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 테넌트/인증 검증 실패 (401 Unauthorized)
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// 잘못된 페이로드 또는 엔티티 수용 규칙 위반 (400 Bad Request)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 조회 실패 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 분류되지 않은 스토리지 실패, 타임아웃 포함 (500)
    #[error("Storage error: {0}")]
    StorageUnknown(String),

    /// 문서 갱신 실패 (500)
    #[error("Update failed: {0}")]
    UpdateFailed(String),

    /// 참조 무결성 가드에 의해 삭제 거부 (409 Conflict)
    #[error("Removal blocked: {0}")]
    RemovalBlocked(String),

    /// 소프트 삭제 실패 (500)
    #[error("Removal failed: {0}")]
    RemovalFailed(String),
}

impl AppError {
    /// 로케일과 무관한 안정적인 머신 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::AccessDenied(_) => "ACCESS_DENIED",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::StorageUnknown(_) => "UNKNOWN",
            AppError::UpdateFailed(_) => "UPDATE_FAILED",
            AppError::RemovalBlocked(_) => "REMOVAL_BLOCKED",
            AppError::RemovalFailed(_) => "REMOVE_FAILED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::AccessDenied(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RemovalBlocked(_) => StatusCode::CONFLICT,
            AppError::StorageUnknown(_)
            | AppError::UpdateFailed(_)
            | AppError::RemovalFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에게 보여줄 로케일별 메시지
    pub fn localized_message(&self, locale: Locale) -> &'static str {
        locale.error_message(self.code())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("document not found".to_string()),
            RepoError::Unknown(detail) => AppError::StorageUnknown(detail),
            RepoError::UpdateFailed(detail) => AppError::UpdateFailed(detail),
            RepoError::RemoveFailed(detail) => AppError::RemovalFailed(detail),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// 핸들러 밖(추출기 등)에서 발생한 에러용 기본 응답
    ///
    /// 요청 로케일을 알 수 없으므로 영어 메시지를 사용합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status())
            .json(serde_json::json!({
                "success": false,
                "error": {
                    "code": self.code(),
                    "message": self.localized_message(Locale::En),
                }
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
