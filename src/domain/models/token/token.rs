//! 액세스 토큰 클레임
//!
//! RFC 7519 등록 클레임만 사용합니다. 토큰은 어디에도 저장되지 않으며,
//! 유효성은 서명과 `exp`만으로 재구성됩니다.
use serde::{Deserialize, Serialize};

/// 액세스 토큰의 클레임(Payload)
///
/// - `iss`: 발급자 (고정 상수 `"chirpy"`)
/// - `sub`: 사용자 ID (UUID 문자열)
/// - `iat`: 발급 시각 (Unix timestamp)
/// - `exp`: 만료 시각 (Unix timestamp)
/// - `jti`: 토큰 고유 ID. 같은 초에 발급된 토큰도 서로 다른 문자열이 되도록 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}
