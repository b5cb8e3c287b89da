//! `Authorization` 헤더 자격 증명 추출
//!
//! 순수 함수이며 I/O가 없습니다. 접두사는 대소문자를 구분하고 정확히 공백 하나를
//! 포함해야 합니다. 실패 원인(헤더 없음, 비 UTF-8, 접두사 불일치, 빈 값)은
//! 모두 `AuthError::Unauthorized` 하나로 합쳐집니다.

use actix_web::http::header::{HeaderMap, AUTHORIZATION};

use crate::errors::AuthError;

pub const BEARER_PREFIX: &str = "Bearer ";
pub const API_KEY_PREFIX: &str = "ApiKey ";

/// `Authorization: Bearer <token>`에서 토큰을 꺼냅니다.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    extract_with_prefix(headers, BEARER_PREFIX)
}

/// `Authorization: ApiKey <key>`에서 키를 꺼냅니다.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    extract_with_prefix(headers, API_KEY_PREFIX)
}

fn extract_with_prefix(headers: &HeaderMap, prefix: &str) -> Result<String, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::Unauthorized)?
        .to_str()
        .map_err(|_| AuthError::Unauthorized)?;

    match value.strip_prefix(prefix) {
        Some(credential) if !credential.is_empty() => Ok(credential.to_string()),
        _ => Err(AuthError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;

    fn headers_with(value: HeaderValue) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        headers
    }

    #[test]
    fn test_bearer_token_is_extracted() {
        let headers = headers_with(HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        for raw in ["bearer abc", "BEARER abc", "Bearerabc", "Basic abc"] {
            let headers = headers_with(HeaderValue::from_static(raw));
            assert_eq!(extract_bearer_token(&headers), Err(AuthError::Unauthorized), "{}", raw);
        }
    }

    #[test]
    fn test_empty_or_short_value_is_unauthorized() {
        for raw in ["Bearer ", "Bearer", "Bear", ""] {
            let headers = headers_with(HeaderValue::from_static(raw));
            assert_eq!(extract_bearer_token(&headers), Err(AuthError::Unauthorized), "{:?}", raw);
        }
    }

    #[test]
    fn test_non_utf8_value_is_unauthorized() {
        let headers = headers_with(HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap());
        assert_eq!(extract_bearer_token(&headers), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_api_key_uses_its_own_prefix() {
        let headers = headers_with(HeaderValue::from_static("ApiKey f271c81ff7084ee5b99a5091b42d486e"));

        assert_eq!(extract_api_key(&headers).unwrap(), "f271c81ff7084ee5b99a5091b42d486e");
        assert_eq!(extract_bearer_token(&headers), Err(AuthError::Unauthorized));
    }
}
