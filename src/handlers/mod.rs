//! # HTTP Handlers
//!
//! 요청 본문/경로를 서비스 호출로 옮기고 결과를 응답 봉투로 감쌉니다.
//! 에러 메시지는 요청의 `Accept-Language`에 맞춰 로케일별로 렌더링합니다.
//!
//! | 모듈 | 엔드포인트 |
//! |------|-----------|
//! | [`questions`] | `/questions`, `/question`, `/question/{id}` |
//! | [`quizzes`] | `/quiz`, `/quiz/{id}`, `/quizzes` |
//! | [`quiz_questions`] | `/quiz-questions`, `/quiz-questions/{id}`, `/quiz-question/{id}` |

pub mod questions;
pub mod quizzes;
pub mod quiz_questions;

use actix_web::http::StatusCode;
use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::ApiResponse;
use crate::domain::models::CallerScope;
use crate::middlewares::request_locale;

/// 서비스 결과를 응답 봉투로 변환합니다.
pub(crate) fn reply<T: Serialize>(
    scope: &CallerScope,
    status: StatusCode,
    message: &str,
    result: AppResult<T>,
) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::build(status).json(ApiResponse::ok(message, data)),
        Err(err) => failure(scope, &err),
    }
}

pub(crate) fn failure(scope: &CallerScope, err: &AppError) -> HttpResponse {
    HttpResponse::build(err.status()).json(ApiResponse::<()>::failure(err, scope.locale))
}

/// GET 조회의 선택적 JSON 필터 본문
///
/// 본문이 비어 있으면 기본값(제약 없음)입니다.
pub(crate) fn optional_filter<T>(body: &web::Bytes) -> AppResult<T>
where
    T: DeserializeOwned + Default + Validate,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let filter: T = serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidInput(format!("invalid filter: {}", e)))?;

    filter
        .validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    Ok(filter)
}

/// JSON 본문 역직렬화 실패를 `INVALID_INPUT` 응답으로 바꿉니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        log::warn!("invalid JSON body on {}: {}", req.path(), err);

        let error = AppError::InvalidInput(err.to_string());
        let response = HttpResponse::build(error.status())
            .json(ApiResponse::<()>::failure(&error, request_locale(req.headers())));

        actix_web::error::InternalError::from_response(err, response).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::{FilterQuestion, FilterQuiz};

    #[test]
    fn test_optional_filter_empty_body_is_default() {
        let filter: FilterQuiz = optional_filter(&web::Bytes::new()).unwrap();
        assert_eq!(filter, FilterQuiz::default());

        let filter: FilterQuestion = optional_filter(&web::Bytes::from_static(b"  \n")).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_optional_filter_rejects_bad_input() {
        let result: Result<FilterQuestion, _> = optional_filter(&web::Bytes::from_static(b"{not json"));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));

        let result: Result<FilterQuestion, _> =
            optional_filter(&web::Bytes::from_static(br#"{"difficulty": 9}"#));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
