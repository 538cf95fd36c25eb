//! 퀴즈 및 퀴즈-문항 연결 엔티티 모듈

pub mod quiz;
pub mod quiz_question;
