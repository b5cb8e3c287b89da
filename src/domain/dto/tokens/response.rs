use serde::{Deserialize, Serialize};

/// 리프레시 성공 시 새로 발급된 액세스 토큰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub token: String,
}

impl AccessTokenResponse {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}
