//! 사용자 생성 요청 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청
///
/// 비밀번호 강도 규칙은 두지 않습니다. 길이 상한(72바이트)은 bcrypt가 해시 단계에서
/// 거부하며, 이는 `CredentialError`로 전달됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
