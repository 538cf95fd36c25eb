//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이를 오가는 요청/응답 구조체입니다.
//! 엔티티([`crate::domain::entities`])는 저장 형태를, DTO는 API 계약을 표현합니다.

pub mod quiz;

pub use quiz::*;
