//! 엔티티들이 공유하는 값 객체
//!
//! 선택지, 태그, 참조, 다국어 제목, 대상자 목록과
//! 퀴즈/퀴즈 문항이 함께 쓰는 [`RecordStatus`]를 정의합니다.

use serde::{Deserialize, Serialize};
use crate::domain::constants::REMOVED_STATUS;

/// 문항 선택지 (인덱스 + 본문)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: i32,
    #[serde(default)]
    pub text: String,
}

/// 영어/페르시아어 제목
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub fa: String,
}

/// 태그
///
/// 필터는 `uuid` 로만 매칭합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub uuid: String,
    #[serde(default)]
    pub title: Title,
}

/// 외부 리소스에 대한 타입이 있는 참조
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ref {
    #[serde(default)]
    pub ref_type: String,
    pub ref_id: String,
}

/// 퀴즈 대상자 (파티 uuid + 다국어 제목)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audience {
    #[serde(rename = "owner_uuid")]
    pub owner: String,
    #[serde(default)]
    pub title: Title,
}

/// 퀴즈와 퀴즈 문항의 상태
///
/// `Active(1) → Removed(-1)` 단방향 전이만 존재합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum RecordStatus {
    #[default]
    Active,
    Removed,
}

impl TryFrom<i32> for RecordStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RecordStatus::Active),
            REMOVED_STATUS => Ok(RecordStatus::Removed),
            other => Err(format!("unknown record status: {}", other)),
        }
    }
}

impl From<RecordStatus> for i32 {
    fn from(status: RecordStatus) -> i32 {
        match status {
            RecordStatus::Active => 1,
            RecordStatus::Removed => REMOVED_STATUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_status_wire_values() {
        assert_eq!(serde_json::to_string(&RecordStatus::Active).unwrap(), "1");
        assert_eq!(serde_json::to_string(&RecordStatus::Removed).unwrap(), "-1");
        assert!(serde_json::from_str::<RecordStatus>("0").is_err());
    }
}
