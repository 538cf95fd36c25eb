//! # Authentication Configuration Module
//!
//! 호출자 토큰 검증과 클레임 이름 설정입니다.
//!
//! 클라이언트 애플리케이션은 `Client-Token` 헤더로, 사용자는
//! `Authorization: Bearer` 헤더로 HS256 JWT를 보냅니다. 두 토큰 모두
//! `JWT_SECRET`으로 검증합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export CLIENT_SCOPE_CLAIM="quiz"        # 클라이언트 토큰의 테넌트 계정 클레임
//! export USER_SCOPE_CLAIM="user_uuid"     # 사용자 토큰의 사용자 클레임
//! ```

use std::env;

pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 검증에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 없으면 개발용 기본값을 쓰고 경고를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }
}

/// 토큰에서 호출자 범위를 꺼낼 클레임 이름
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimConfig {
    /// 클라이언트 토큰에서 테넌트 계정 uuid를 담은 클레임
    pub client_scope: String,
    /// 사용자 토큰에서 사용자 uuid를 담은 클레임
    pub user_scope: String,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            client_scope: "quiz".to_string(),
            user_scope: "user_uuid".to_string(),
        }
    }
}

impl ClaimConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            client_scope: env::var("CLIENT_SCOPE_CLAIM").unwrap_or(defaults.client_scope),
            user_scope: env::var("USER_SCOPE_CLAIM").unwrap_or(defaults.user_scope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_defaults() {
        let claims = ClaimConfig::default();

        assert_eq!(claims.client_scope, "quiz");
        assert_eq!(claims.user_scope, "user_uuid");
    }

    #[test]
    fn test_claims_from_env_fall_back_to_defaults() {
        if env::var("CLIENT_SCOPE_CLAIM").is_err() && env::var("USER_SCOPE_CLAIM").is_err() {
            assert_eq!(ClaimConfig::from_env(), ClaimConfig::default());
        }
    }
}
