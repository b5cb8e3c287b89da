use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 요청
///
/// 이메일 형식은 검사하지 않습니다. 존재하지 않는 이메일은 잘못된 비밀번호와
/// 같은 401로 응답해야 하기 때문입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "이메일을 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
