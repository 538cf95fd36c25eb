//! # Repository Layer
//!
//! 서비스 계층이 소비하는 영속성 포트([`QuizRepository`])와 그 구현체들입니다.
//!
//! | 구현체 | 모듈 | 용도 |
//! |--------|------|------|
//! | [`MongoQuizRepository`] | [`mongo`] | 운영 환경 (MongoDB) |
//! | [`MemoryQuizRepository`] | [`memory`] | 로컬 실행, 통합 테스트 |
//!
//! 모든 조회/갱신/삭제는 [`Predicate`]를 받습니다. 어댑터는 술어의
//! [`Clause`](crate::domain::models::Clause)를 자기 질의 언어로 옮길 뿐,
//! 테넌트나 상태 조건을 임의로 덧붙이지 않습니다.

pub mod memory;
pub mod mongo;

pub use memory::memory_repo::MemoryQuizRepository;
pub use mongo::quiz_repo::MongoQuizRepository;

use async_trait::async_trait;
use thiserror::Error;
use crate::domain::entities::{Account, Question, Quiz, QuizQuestion};
use crate::domain::models::Predicate;

/// 포트 수준의 실패 사유
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepoError {
    /// 조건에 맞는 문서가 없음
    #[error("document not found")]
    NotFound,

    /// 분류되지 않은 스토리지 실패 (배치 삽입 부분 실패 포함)
    #[error("storage error: {0}")]
    Unknown(String),

    #[error("update failed: {0}")]
    UpdateFailed(String),

    #[error("remove failed: {0}")]
    RemoveFailed(String),
}

impl RepoError {
    pub fn unknown(message: impl ToString) -> Self {
        Self::Unknown(message.to_string())
    }
}

/// 퀴즈 콘텐츠 저장소 포트
///
/// - 배치 삽입은 원자적이지 않습니다. 일부만 기록되어도 실패는 `Unknown` 하나로 보고됩니다.
/// - 갱신은 문서 전체 교체이며, 일치하는 문서가 없으면 `NotFound`입니다.
/// - 소프트 삭제는 `status`를 `-1`로 바꿉니다. 일치하는 문서가 없어도 성공입니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_account(&self, account_id: &str) -> Result<Account, RepoError>;

    // Inserts
    async fn insert_questions(&self, items: &[Question]) -> Result<(), RepoError>;
    async fn insert_quiz(&self, item: &Quiz) -> Result<(), RepoError>;
    async fn insert_quiz_questions(&self, items: &[QuizQuestion]) -> Result<(), RepoError>;

    // Queries
    async fn find_question(&self, filter: &Predicate) -> Result<Question, RepoError>;
    async fn find_questions(&self, filter: &Predicate) -> Result<Vec<Question>, RepoError>;
    async fn find_quiz(&self, filter: &Predicate) -> Result<Quiz, RepoError>;
    async fn find_quizzes(&self, filter: &Predicate) -> Result<Vec<Quiz>, RepoError>;
    async fn find_quiz_questions(&self, filter: &Predicate) -> Result<Vec<QuizQuestion>, RepoError>;

    // Whole-document replace
    async fn update_question(&self, filter: &Predicate, item: &Question) -> Result<(), RepoError>;
    async fn update_quiz(&self, filter: &Predicate, item: &Quiz) -> Result<(), RepoError>;

    // Soft delete
    async fn soft_delete_question(&self, filter: &Predicate) -> Result<(), RepoError>;
    async fn soft_delete_quiz(&self, filter: &Predicate) -> Result<(), RepoError>;
    async fn soft_delete_quiz_question(&self, filter: &Predicate) -> Result<(), RepoError>;
}
