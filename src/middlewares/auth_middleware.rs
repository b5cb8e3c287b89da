//! # 인증 미들웨어
//!
//! 보호된 엔드포인트 게이트입니다. `Authorization: Bearer <jwt>` 헤더를 검증하고,
//! 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! request extensions에 저장합니다. 실패하면 핸들러를 호출하지 않고
//! `401 {"error": "Unauthorized"}`로 응답합니다.
//!
//! ```rust,ignore
//! #[post("/chirps", wrap = "AuthMiddleware::required()")]
//! pub async fn create_chirp(user: AuthenticatedUser, payload: web::Json<CreateChirpRequest>) -> ...
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 액세스 토큰 인증 미들웨어
///
/// 검증에 쓰는 `TokenService`는 앱 데이터(`web::Data<TokenService>`)에서 꺼냅니다.
/// 등록되어 있지 않으면 500으로 응답합니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
