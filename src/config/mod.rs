//! # Configuration Module
//!
//! 환경 변수 기반 설정입니다. `main`에서 `PROFILE`에 맞는 `.env` 파일을
//! 먼저 읽은 뒤 이 모듈의 값을 사용합니다.
//!
//! | 구조체 | 환경 변수 |
//! |--------|-----------|
//! | [`ServerConfig`] | `HOST`, `PORT` |
//! | [`StorageConfig`] | `STORAGE_BACKEND`, `MONGODB_URI`, `DATABASE_NAME`, `STORAGE_TIMEOUT_SECS`, `MEMORY_ACCOUNT_ID`, `MEMORY_MIN_TAG`, `MEMORY_REQUIRES_AUDIT` |
//! | [`RateLimitConfig`] | `RATE_LIMIT_PER_SECOND`, `RATE_LIMIT_BURST_SIZE` |
//! | [`JwtConfig`] | `JWT_SECRET` |
//! | [`ClaimConfig`] | `CLIENT_SCOPE_CLAIM`, `USER_SCOPE_CLAIM` |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
