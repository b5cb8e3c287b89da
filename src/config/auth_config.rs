//! # Authentication Configuration Module
//!
//! 액세스 토큰 서명 키, 토큰 수명, 결제 웹훅(Polka) API 키를 정의합니다.
//!
//! 액세스 토큰 수명(3600초)과 리프레시 토큰 수명(60일)은 고정값이며,
//! 서명 키는 프로세스 시작 시 한 번 로드된 후 모든 요청 핸들러가 읽기 전용으로 공유합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export SECRET_JWT_STRING="your-super-secret-jwt-key"
//! export POLKA_KEY="f271c81ff7084ee5b99a5091b42d486e"
//! ```

use chrono::Duration;

/// 액세스 토큰 발급자(issuer) 클레임
pub const TOKEN_ISSUER: &str = "chirpy";

/// 액세스 토큰 수명 (초)
pub const ACCESS_TOKEN_LIFETIME_SECS: i64 = 3600;

/// 리프레시 토큰 수명 (일)
pub const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 60;

/// JWT 서명 및 토큰 수명 설정
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 서명 키
    pub secret: String,
    pub access_token_lifetime: Duration,
    pub refresh_token_lifetime: Duration,
}

impl JwtConfig {
    /// 고정 수명과 주어진 서명 키로 설정을 생성합니다.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_lifetime: Duration::seconds(ACCESS_TOKEN_LIFETIME_SECS),
            refresh_token_lifetime: Duration::days(REFRESH_TOKEN_LIFETIME_DAYS),
        }
    }
}

// 서명 키가 로그에 찍히지 않도록 Debug를 직접 구현
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_lifetime", &self.access_token_lifetime)
            .field("refresh_token_lifetime", &self.refresh_token_lifetime)
            .finish()
    }
}

/// 결제 이벤트 웹훅 설정
#[derive(Clone)]
pub struct PolkaConfig {
    pub api_key: String,
}

impl std::fmt::Debug for PolkaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolkaConfig").field("api_key", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_lifetimes() {
        let config = JwtConfig::new("secret");

        assert_eq!(config.access_token_lifetime.num_seconds(), 3600);
        assert_eq!(config.refresh_token_lifetime.num_days(), 60);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let jwt = format!("{:?}", JwtConfig::new("top-secret-value"));
        let polka = format!("{:?}", PolkaConfig { api_key: "polka-key-value".to_string() });

        assert!(!jwt.contains("top-secret-value"));
        assert!(!polka.contains("polka-key-value"));
    }
}
