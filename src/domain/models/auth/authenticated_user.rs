use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 검증된 액세스 토큰에서 추출된 요청 주체
///
/// `AuthMiddleware`가 request extensions에 저장하며, 보호된 핸들러는
/// 인자로 받아 소유권 검사(예: 본인 게시글만 삭제)에 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(*user)),
            None => ready(Err(actix_web::error::ErrorUnauthorized("Unauthorized"))),
        }
    }
}
