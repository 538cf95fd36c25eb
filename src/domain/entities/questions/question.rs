//! Question Entity
//!
//! 객관식 문항입니다. 정확히 4개의 선택지를 가지며, 계정 설정에 따라
//! 검수(Audited) 또는 미검수(NonAudited) 상태로 생성됩니다.
//!
//! ## 상태 전이
//!
//! ```text
//! Created ─┬─> NonAudited(0) ─┐
//!          └─> Audited(1) ────┴─> Removed(-1)  (terminal)
//! ```

use serde::{Deserialize, Serialize};
use crate::domain::constants::REMOVED_STATUS;
use crate::domain::entities::common::{Choice, Ref, Tag};

/// 저장 가능한 문항이 가져야 하는 선택지 수
pub const REQUIRED_CHOICES: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// 저장소 식별자 (서버 생성)
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,

    /// 테넌트 계정 참조 (클라이언트 토큰 클레임에서 설정)
    #[serde(rename = "acnt_uuid", default)]
    pub account_id: String,

    #[serde(default)]
    pub text: String,

    /// 이미지 참조
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub choices: Vec<Choice>,

    /// 정답 선택지 인덱스
    #[serde(default)]
    pub answer: i32,

    pub difficulty_level: DifficultyLevel,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub refs: Vec<Ref>,

    /// 소유 파티 uuid
    #[serde(rename = "owner_uuid", default)]
    pub owner: String,

    /// 생성 시각 (Unix 초)
    #[serde(default)]
    pub created_at: i64,

    #[serde(default)]
    pub created_by: String,

    #[serde(default)]
    pub status: QuestionStatus,
}

impl Question {
    pub fn is_removed(&self) -> bool {
        self.status == QuestionStatus::Removed
    }
}

/// 난이도 (1: 쉬움, 2: 보통, 3: 어려움)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum DifficultyLevel {
    Easy,
    Intermediate,
    Hard,
}

impl TryFrom<i32> for DifficultyLevel {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DifficultyLevel::Easy),
            2 => Ok(DifficultyLevel::Intermediate),
            3 => Ok(DifficultyLevel::Hard),
            other => Err(format!("difficulty level must be 1-3, got {}", other)),
        }
    }
}

impl From<DifficultyLevel> for i32 {
    fn from(level: DifficultyLevel) -> i32 {
        match level {
            DifficultyLevel::Easy => 1,
            DifficultyLevel::Intermediate => 2,
            DifficultyLevel::Hard => 3,
        }
    }
}

/// 문항 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum QuestionStatus {
    #[default]
    NonAudited,
    Audited,
    Removed,
}

impl TryFrom<i32> for QuestionStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(QuestionStatus::NonAudited),
            1 => Ok(QuestionStatus::Audited),
            REMOVED_STATUS => Ok(QuestionStatus::Removed),
            other => Err(format!("unknown question status: {}", other)),
        }
    }
}

impl From<QuestionStatus> for i32 {
    fn from(status: QuestionStatus) -> i32 {
        match status {
            QuestionStatus::NonAudited => 0,
            QuestionStatus::Audited => 1,
            QuestionStatus::Removed => REMOVED_STATUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_without_server_fields_deserializes() {
        let payload = serde_json::json!({
            "text": "2 + 2 = ?",
            "choices": [
                {"index": 1, "text": "3"},
                {"index": 2, "text": "4"},
                {"index": 3, "text": "5"},
                {"index": 4, "text": "22"}
            ],
            "answer": 2,
            "difficulty_level": 1,
            "tags": [{"uuid": "math"}]
        });

        let question: Question = serde_json::from_value(payload).unwrap();

        assert!(question.id.is_empty());
        assert_eq!(question.status, QuestionStatus::NonAudited);
        assert_eq!(question.choices.len(), REQUIRED_CHOICES);
    }

    #[test]
    fn test_difficulty_out_of_range_is_rejected() {
        assert!(serde_json::from_str::<DifficultyLevel>("4").is_err());
        assert!(serde_json::from_str::<DifficultyLevel>("0").is_err());
        assert_eq!(serde_json::from_str::<DifficultyLevel>("3").unwrap(), DifficultyLevel::Hard);
    }

    #[test]
    fn test_storage_identity_is_serialized_as_underscore_id() {
        let payload = serde_json::json!({"id": "q-1", "difficulty_level": 2});
        let question: Question = serde_json::from_value(payload).unwrap();
        let value = serde_json::to_value(&question).unwrap();

        assert_eq!(value["_id"], "q-1");
        assert_eq!(value["status"], 0);
    }
}
