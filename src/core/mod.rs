//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 기능을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 접근 거부, 입력 오류, 조회 실패, 스토리지 실패, 삭제 차단 등
//!   닫힌 에러 분류 체계
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: 리포지토리 포트의 `RepoError` → `AppError`
//!
//! ### [`locale`] - 응답 메시지 로케일
//! - 에러 코드를 `en` / `fa` 메시지로 변환

pub mod errors;
pub mod locale;

pub use errors::*;
pub use locale::Locale;
