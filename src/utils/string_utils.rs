//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 금칙어를 대체할 문자열
pub const CENSOR_MASK: &str = "****";

/// 단일 공백으로 나눈 단어 중 금칙어와 대소문자 구분 없이 일치하는 단어를 가립니다.
///
/// 구두점이 붙은 단어(`"kerfuffle!"`)는 일치하지 않으며, 연속 공백도 그대로 보존됩니다.
///
/// ```rust,ignore
/// let cleaned = censor_words("This is a Kerfuffle opinion", &["kerfuffle"]);
/// assert_eq!(cleaned, "This is a **** opinion");
/// ```
pub fn censor_words(text: &str, banned: &[&str]) -> String {
    text.split(' ')
        .map(|word| {
            let lowered = word.to_lowercase();
            if banned.iter().any(|banned_word| *banned_word == lowered) {
                CENSOR_MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용하면
/// 빈 문자열은 "값 없음"으로 취급됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
