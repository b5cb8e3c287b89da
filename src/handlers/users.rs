//! 사용자 핸들러
//!
//! - `POST /api/users`: 가입 (공개)
//! - `PUT /api/users`: 본인 이메일/비밀번호 변경 (액세스 토큰 필요)

use actix_web::{post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    domain::{
        dto::users::{CreateUserRequest, UpdateUserRequest},
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
    middlewares::AuthMiddleware,
    services::{auth::SessionService, users::UserService},
};

/// 사용자 생성 핸들러
///
/// 비밀번호는 bcrypt로 해싱되어 저장되며 응답에는 포함되지 않습니다.
/// 이미 등록된 이메일이면 409입니다.
#[post("/users")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// 인증된 사용자 본인의 자격 증명 변경
///
/// 빠진 필드는 기존 값을 유지합니다. 둘 다 빠지면 400입니다.
#[put("/users", wrap = "AuthMiddleware::required()")]
pub async fn update_user(
    user: AuthenticatedUser,
    session_service: web::Data<SessionService>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    if request.is_empty() {
        return Err(AppError::ValidationError(
            "Either email or password is required".to_string(),
        ));
    }

    let updated = session_service.update_credentials(user.user_id, request).await?;

    Ok(HttpResponse::Ok().json(updated))
}
