//! # Domain Models Module
//!
//! 영속성 엔티티와 구별되는 도메인 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - 데이터베이스에 직접 저장되는 문서
//! - 예시: `Question`, `Quiz`, `QuizQuestion`, `Account`
//!
//! ### Models (`./`)
//! - 저장되지 않는 값 객체
//! - [`auth::caller_scope::CallerScope`]: 요청별 테넌트/사용자/로케일
//! - [`query::predicate::Predicate`]: 리포지토리 포트를 건너는 조회 조건

pub mod auth;
pub mod query;

pub use auth::caller_scope::CallerScope;
pub use query::predicate::{Clause, Predicate};
