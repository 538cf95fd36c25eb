//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 스토리지, 요청 제한 설정을 환경 변수에서 읽습니다.

use std::env;
use std::time::Duration;
use crate::domain::entities::{Account, AccountConfig};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `PROFILE` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let value = env::var("ENVIRONMENT")
            .or_else(|_| env::var("PROFILE"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&value)
    }

    /// 개발용 이름(`dev`, `development`, `test`, `local`)만 `Development`이고
    /// 나머지는 모두 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" | "test" | "testing" | "local" => Environment::Development,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8000
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 사용할 저장소 구현
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Mongo,
    Memory,
}

impl StorageBackend {
    /// 알 수 없는 값은 `Mongo`로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }
}

/// 스토리지 연결 설정
///
/// ```bash
/// export STORAGE_BACKEND="mongo"          # mongo | memory
/// export MONGODB_URI="mongodb://localhost:27017"
/// export DATABASE_NAME="quiz"
/// export STORAGE_TIMEOUT_SECS="5"
///
/// # memory 백엔드에서만 사용
/// export MEMORY_ACCOUNT_ID="acnt-1"
/// export MEMORY_MIN_TAG="2"
/// export MEMORY_REQUIRES_AUDIT="false"
/// ```
pub struct StorageConfig;

impl StorageConfig {
    pub fn backend() -> StorageBackend {
        env::var("STORAGE_BACKEND")
            .map(|value| StorageBackend::from_str(&value))
            .unwrap_or(StorageBackend::Mongo)
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "quiz".to_string())
    }

    /// 저장소 호출 하나에 허용되는 시간. 기본값: 5초
    ///
    /// 0 이나 숫자가 아닌 값은 기본값으로 대체합니다.
    pub fn timeout() -> Duration {
        let seconds = env::var("STORAGE_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|seconds| *seconds > 0)
            .unwrap_or(5);

        Duration::from_secs(seconds)
    }

    /// 메모리 저장소에 미리 넣어 둘 계정. `MEMORY_ACCOUNT_ID`가 없으면 `None`
    pub fn memory_account() -> Option<Account> {
        memory_account_from(
            env::var("MEMORY_ACCOUNT_ID").ok(),
            env::var("MEMORY_MIN_TAG").ok(),
            env::var("MEMORY_REQUIRES_AUDIT").ok(),
        )
    }
}

fn memory_account_from(
    account_id: Option<String>,
    minimum_tag_count: Option<String>,
    requires_audit: Option<String>,
) -> Option<Account> {
    let account_id = account_id.map(|id| id.trim().to_string()).filter(|id| !id.is_empty())?;

    let config = AccountConfig {
        requires_audit: requires_audit
            .map(|value| matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false),
        minimum_tag_count: minimum_tag_count
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0),
    };

    Some(Account::new(account_id, config))
}

/// 요청 제한 (actix-governor) 설정
pub struct RateLimitConfig;

impl RateLimitConfig {
    /// 초당 허용 요청 수. 기본값: 100
    pub fn per_second() -> u64 {
        env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|value| *value > 0)
            .unwrap_or(100)
    }

    /// 버스트 허용량. 기본값: 200
    pub fn burst_size() -> u32 {
        env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|value| *value > 0)
            .unwrap_or(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str(" Test "), Environment::Development);
        assert_eq!(Environment::from_str("staging"), Environment::Production);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str(" MEMORY "), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongo"), StorageBackend::Mongo);
        assert_eq!(StorageBackend::from_str("postgres"), StorageBackend::Mongo);
    }

    #[test]
    fn test_memory_account_seed() {
        assert_eq!(memory_account_from(None, Some("2".to_string()), None), None);
        assert_eq!(memory_account_from(Some("  ".to_string()), None, None), None);

        let account = memory_account_from(
            Some("acnt-1".to_string()),
            Some("2".to_string()),
            Some("TRUE".to_string()),
        )
        .unwrap();
        assert_eq!(account.id, "acnt-1");
        assert_eq!(account.config.minimum_tag_count, 2);
        assert!(account.config.requires_audit);

        let account = memory_account_from(Some("acnt-1".to_string()), Some("two".to_string()), None).unwrap();
        assert_eq!(account.config, AccountConfig::default());
    }

    #[test]
    fn test_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("STORAGE_TIMEOUT_SECS").is_err() {
            assert_eq!(StorageConfig::timeout(), Duration::from_secs(5));
        }

        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(StorageConfig::database_name(), "quiz");
        }
    }
}
