//! JWT 클레임 추출 서비스
//!
//! 호출자 토큰(HS256)을 검증하고 이름으로 클레임을 꺼냅니다.
//! 토큰 발급은 이 서비스의 책임이 아닙니다.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde_json::{Map, Value};
use crate::config::JwtConfig;
use crate::core::errors::AppError;

/// 클레임 집합
pub type Claims = Map<String, Value>;

#[derive(Clone)]
pub struct TokenService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        // 호출자 토큰은 만료 시각을 필수로 요구하지 않습니다.
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn from_env() -> Self {
        Self::new(&JwtConfig::secret())
    }

    /// 서명과 (있다면) 만료 시각을 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AccessDenied` - 서명 불일치, 만료, 형식 오류
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AccessDenied("token expired".to_string())
                }
                _ => AppError::AccessDenied(format!("invalid token: {}", e)),
            })
    }

    /// 검증된 토큰에서 문자열 클레임을 꺼냅니다.
    ///
    /// 검증 실패, 클레임 없음, 문자열이 아닌 값은 모두 `None`입니다.
    pub fn extract_claim(&self, token: &str, name: &str) -> Option<String> {
        let claims = self.verify(token).ok()?;
        Self::claim(&claims, name)
    }

    /// 이미 검증된 클레임 집합에서 문자열 클레임을 꺼냅니다.
    pub fn claim(claims: &Claims, name: &str) -> Option<String> {
        claims.get(name).and_then(Value::as_str).map(str::to_string)
    }

    /// "Bearer {token}" 형식에서 토큰 부분을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AccessDenied("invalid authorization header".to_string()))
    }
}
