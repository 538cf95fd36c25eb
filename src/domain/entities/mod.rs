//! 도메인 엔티티 모듈
//!
//! MongoDB에 저장되는 문서 모델들입니다. 모든 엔티티는 테넌트 계정 참조
//! (`acnt_uuid`)와 소프트 삭제용 상태 필드를 가집니다.
//!
//! | 엔티티 | 컬렉션 | 상태 값 |
//! |--------|--------|---------|
//! | [`Account`] | `accounts` | 1 / -1 |
//! | [`Question`] | `questions` | 0 미검수 / 1 검수 / -1 삭제 |
//! | [`Quiz`] | `quizzes` | 1 활성 / -1 삭제 |
//! | [`QuizQuestion`] | `quiz_questions` | 1 활성 / -1 삭제 |

pub mod common;
pub mod accounts;
pub mod questions;
pub mod quizzes;

pub use common::*;
pub use accounts::account::{Account, AccountConfig};
pub use questions::question::{DifficultyLevel, Question, QuestionStatus, REQUIRED_CHOICES};
pub use quizzes::quiz::{DurationType, ParticipationType, Quiz};
pub use quizzes::quiz_question::QuizQuestion;
