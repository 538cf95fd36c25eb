//! 응답 DTO
//!
//! 모든 엔드포인트는 같은 봉투(envelope)를 사용합니다.
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "REF.INSERTED",
//!   "data": { "accepted": [...], "rejected": [...] },
//!   "error": { "code": "INVALID_INPUT", "message": "The submitted data is not valid" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::core::locale::Locale;
use crate::domain::entities::{Choice, Question, QuizQuestion};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub fn from_error(error: &AppError, locale: Locale) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.localized_message(locale).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
            error: None,
        }
    }

    /// 데이터와 에러를 함께 싣는 응답 (부분 수용된 문항 배치)
    pub fn partial(message: &str, data: T, error: &AppError, locale: Locale) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            data: Some(data),
            error: Some(ErrorBody::from_error(error, locale)),
        }
    }

    pub fn failure(error: &AppError, locale: Locale) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(ErrorBody::from_error(error, locale)),
        }
    }
}

/// 문항 배치 삽입 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionBatchResponse {
    pub accepted: Vec<Question>,
    pub rejected: Vec<Question>,
}

impl QuestionBatchResponse {
    /// 거부된 문항이 없으면 `true`
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// 퀴즈 문항 조회 결과 한 건
///
/// 문항 본문/선택지는 문항에서, 점수/제한 시간은 연결 행에서 가져옵니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestionView {
    pub text: String,
    pub choices: Vec<Choice>,
    pub score: i32,
    pub duration: i32,
}

impl QuizQuestionView {
    pub fn project(question: Question, row: &QuizQuestion) -> Self {
        Self {
            text: question.text,
            choices: question.choices,
            score: row.score,
            duration: row.duration,
        }
    }
}
