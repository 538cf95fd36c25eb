//! 퀴즈 콘텐츠 유스케이스

pub mod filter_builder;
pub mod stamping;
pub mod quiz_service;

pub use quiz_service::QuizService;
