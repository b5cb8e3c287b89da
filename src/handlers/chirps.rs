//! 칩(Chirp) 핸들러
//!
//! 작성과 삭제는 액세스 토큰이 필요하고 조회는 공개입니다.

use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    domain::{
        dto::chirps::{ChirpListQuery, CreateChirpRequest},
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
    middlewares::AuthMiddleware,
    services::chirps::ChirpService,
};

/// 칩 작성
///
/// 140자를 넘으면 400이며, 금칙어는 `****`로 치환되어 저장됩니다.
#[post("/chirps", wrap = "AuthMiddleware::required()")]
pub async fn create_chirp(
    user: AuthenticatedUser,
    chirp_service: web::Data<ChirpService>,
    payload: web::Json<CreateChirpRequest>,
) -> Result<HttpResponse, AppError> {
    let chirp = chirp_service.create_chirp(user.user_id, &payload.body).await?;

    Ok(HttpResponse::Created().json(chirp))
}

/// `?author_id=<uuid>&sort=asc|desc`
#[get("/chirps")]
pub async fn list_chirps(
    chirp_service: web::Data<ChirpService>,
    query: web::Query<ChirpListQuery>,
) -> Result<HttpResponse, AppError> {
    let chirps = chirp_service.list_chirps(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(chirps))
}

#[get("/chirps/{chirp_id}")]
pub async fn get_chirp(
    chirp_service: web::Data<ChirpService>,
    chirp_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let chirp = chirp_service.get_chirp(&chirp_id).await?;
    Ok(HttpResponse::Ok().json(chirp))
}

/// 작성자 본인만 삭제할 수 있습니다. 다른 사용자의 칩이면 403입니다.
#[delete("/chirps/{chirp_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_chirp(
    user: AuthenticatedUser,
    chirp_service: web::Data<ChirpService>,
    chirp_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    chirp_service.delete_chirp(user.user_id, &chirp_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
