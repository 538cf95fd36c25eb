//! Quiz Entity
//!
//! 저장소 식별자(`_id`)와 별개로 공개 식별자(`quiz_uuid`)를 가집니다.
//! 공개 식별자는 생성 시 한 번 발급되며 이후 변하지 않습니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::common::{Audience, RecordStatus, Ref, Tag};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    /// 저장소 식별자 (서버 생성)
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,

    #[serde(rename = "acnt_uuid", default)]
    pub account_id: String,

    /// 공개 퀴즈 식별자 (서버 생성, 불변)
    #[serde(default)]
    pub quiz_uuid: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub duration_type: DurationType,

    /// `duration_type`에 따른 제한 시간
    #[serde(default)]
    pub duration: i32,

    pub participation_type: ParticipationType,

    #[serde(default)]
    pub audiences: Vec<Audience>,

    #[serde(default)]
    pub min_score: i32,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub refs: Vec<Ref>,

    /// 소유 파티 uuid
    #[serde(rename = "owner_uuid", default)]
    pub owner: String,

    #[serde(default)]
    pub created_at: i64,

    #[serde(default)]
    pub created_by: String,

    #[serde(default)]
    pub status: RecordStatus,
}

/// 제한 시간 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum DurationType {
    Unlimited,
    TotalDuration,
    PerQuestionDuration,
}

impl TryFrom<i32> for DurationType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DurationType::Unlimited),
            2 => Ok(DurationType::TotalDuration),
            3 => Ok(DurationType::PerQuestionDuration),
            other => Err(format!("unknown duration type: {}", other)),
        }
    }
}

impl From<DurationType> for i32 {
    fn from(value: DurationType) -> i32 {
        match value {
            DurationType::Unlimited => 1,
            DurationType::TotalDuration => 2,
            DurationType::PerQuestionDuration => 3,
        }
    }
}

/// 참여 방식
///
/// 공개 식별자로 단건 조회할 수 있는 퀴즈는 `Volunteering` 뿐입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ParticipationType {
    Invitation,
    Volunteering,
}

impl TryFrom<i32> for ParticipationType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ParticipationType::Invitation),
            2 => Ok(ParticipationType::Volunteering),
            other => Err(format!("unknown participation type: {}", other)),
        }
    }
}

impl From<ParticipationType> for i32 {
    fn from(value: ParticipationType) -> i32 {
        match value {
            ParticipationType::Invitation => 1,
            ParticipationType::Volunteering => 2,
        }
    }
}
