//! 요청 DTO
//!
//! 배치 삽입 본문과 조회 필터입니다. 필터의 각 필드는 비어 있으면
//! "해당 필드에 제약 없음"을 뜻합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::{Question, QuizQuestion};

/// 문항 배치 삽입 본문 (`{"questions": [...]}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionsRequest {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// 퀴즈-문항 배치 삽입 본문 (`{"questions": [...]}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizQuestionsRequest {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

/// 문항 조회 필터
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct FilterQuestion {
    /// 문항 본문과 정확히 일치
    #[serde(rename = "text", default)]
    pub text: String,

    /// 태그 uuid 중 하나라도 겹치면 일치
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(rename = "owner_uuid", default)]
    pub owner: String,

    /// 0이면 제약 없음
    #[serde(default)]
    #[validate(range(min = 0, max = 3, message = "difficulty must be 0 (any) or between 1 and 3"))]
    pub difficulty: i32,
}

impl FilterQuestion {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.tags.is_empty() && self.owner.is_empty() && self.difficulty == 0
    }
}

/// 퀴즈 조회 필터
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct FilterQuiz {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// 참조 `ref_id` 중 하나라도 겹치면 일치
    #[serde(default)]
    pub refs: Vec<String>,

    #[serde(default)]
    pub owner: String,
}

impl FilterQuiz {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.tags.is_empty() && self.refs.is_empty() && self.owner.is_empty()
    }
}
