//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── constants     - 컬렉션/필드 이름, 응답 메시지 키
//! ├── entities      - 저장되는 문서 (Account, Question, Quiz, QuizQuestion)
//! ├── dto           - 요청/응답 계약
//! └── models        - 값 객체 (CallerScope, Predicate)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```

pub mod constants;
pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
