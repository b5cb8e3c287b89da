//! 게시글 요청 DTO
use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_optional_string;

/// 게시글 작성 요청
///
/// 작성자는 본문이 아니라 액세스 토큰에서 결정됩니다. 길이 제한과 금칙어 치환은
/// `ChirpService`가 담당합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// 목록 정렬 방향 (`created_at` 기준)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// `GET /api/chirps` 쿼리 파라미터
///
/// `author_id`는 문자열로 받아 서비스에서 UUID로 파싱합니다. 잘못된 값은 400이며,
/// 빈 값(`?author_id=`)은 필터 없음으로 취급합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChirpListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub author_id: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}
