//! 문항 엔티티 모듈

pub mod question;
