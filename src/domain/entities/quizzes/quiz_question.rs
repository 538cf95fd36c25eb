//! QuizQuestion Entity
//!
//! 퀴즈(공개 식별자)와 문항(저장소 식별자)을 잇는 연결 엔티티입니다.
//! 점수와 문항별 제한 시간을 함께 보관합니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::common::RecordStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,

    #[serde(rename = "acnt_uuid", default)]
    pub account_id: String,

    /// 퀴즈 공개 식별자
    pub quiz_uuid: String,

    /// 문항 저장소 식별자
    pub question_uuid: String,

    #[serde(default)]
    pub score: i32,

    #[serde(default)]
    pub duration: i32,

    #[serde(default)]
    pub created_at: i64,

    #[serde(default)]
    pub created_by: String,

    #[serde(default)]
    pub status: RecordStatus,
}
