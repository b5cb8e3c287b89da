use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 자격 증명 변경 요청 (`PUT /api/users`)
///
/// 두 필드 모두 선택 사항이며, 전달된 필드만 교체됩니다. 빈 이메일은 생략과 같습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}
