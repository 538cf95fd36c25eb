//! 호출자 토큰 처리

pub mod token_service;

pub use token_service::*;
