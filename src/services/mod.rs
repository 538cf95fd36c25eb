//! # Service Layer
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`quiz`] | 퀴즈 콘텐츠 유스케이스, 필터 빌더, 수용 규칙/스탬핑 |
//! | [`auth`] | 호출자 토큰 검증, 클레임 추출 |

pub mod quiz;
pub mod auth;

pub use quiz::QuizService;
pub use auth::TokenService;
