//! # HTTP Request Handlers
//!
//! 각 핸들러는 요청을 DTO로 역직렬화하고 검증한 뒤, 앱 데이터로 등록된 서비스
//! (`web::Data<...>`)에 위임합니다. 서비스 인스턴스는
//! [`configure_all_routes`](crate::routes::configure_all_routes)가 싱글톤에서 꺼내 등록합니다.
//! 비즈니스 규칙과 저장소 접근은 서비스 계층에 있고, 여기서는 HTTP 상태 코드와
//! 응답 형태만 결정합니다.
//!
//! ```text
//! Client ──HTTP──▶ Handlers ──▶ Services ──▶ Repositories ──▶ PostgreSQL
//! ```
//!
//! 실패는 [`AppError`](crate::errors::AppError)로 반환되어 `{"error": "..."}` 본문으로 변환됩니다.
//!
//! ```rust,ignore
//! #[post("/users")]
//! pub async fn create_user(
//!     user_service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let user = user_service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(user))
//! }
//! ```

pub mod admin;
pub mod auth;
pub mod chirps;
pub mod users;
pub mod webhooks;

#[cfg(test)]
pub(crate) mod testing;
