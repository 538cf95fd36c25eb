//! Account Entity
//!
//! 모든 엔티티의 테넌트 루트입니다. 계정 설정은 문항 검수 여부와
//! 최소 태그 수를 결정합니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::common::RecordStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "acnt_uuid")]
    pub id: String,

    #[serde(rename = "acnt_title", default)]
    pub title: String,

    /// 계정을 소유한 파티 uuid
    #[serde(rename = "owner_uuid", default)]
    pub owner: String,

    #[serde(default)]
    pub config: AccountConfig,

    #[serde(default)]
    pub status: RecordStatus,
}

/// 계정별 문항 정책
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// `true`면 새 문항이 검수 완료(Audited) 상태로 저장됩니다.
    #[serde(rename = "has_audit", default)]
    pub requires_audit: bool,

    /// 문항이 가져야 하는 최소 태그 수
    #[serde(rename = "min_tag", default)]
    pub minimum_tag_count: usize,
}

impl Account {
    pub fn new(id: impl Into<String>, config: AccountConfig) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            owner: String::new(),
            config,
            status: RecordStatus::Active,
        }
    }
}
