//! 사용자 관리 서비스
//!
//! 회원가입, 프리미엄(Chirpy Red) 업그레이드, 개발 환경 초기화를 담당합니다.
//! 로그인과 자격 증명 변경은 토큰 발급과 묶여 있으므로 `SessionService`에 있습니다.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::{
    domain::dto::users::{CreateUserRequest, UserResponse},
    errors::{AppError, AppResult, PersistenceError},
    repositories::users::{UserRepository, UserStore},
    services::auth::PasswordService,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// ```rust,ignore
/// let user_service = UserService::instance();
/// let profile = user_service.create_user(request).await?;
/// ```
pub struct UserService {
    users: Arc<dyn UserStore>,
    passwords: Arc<PasswordService>,
}

static USER_SERVICE_INSTANCE: OnceCell<Arc<UserService>> = OnceCell::new();

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, passwords: Arc<PasswordService>) -> Self {
        Self { users, passwords }
    }

    pub fn instance() -> Arc<Self> {
        USER_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new(UserRepository::instance(), PasswordService::instance())))
            .clone()
    }

    /// 새 사용자를 생성합니다. 토큰은 발급하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - bcrypt가 비밀번호를 처리할 수 없음
    /// * `ConflictError` - 이미 등록된 이메일
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let hashed = self.passwords.hash_password(&request.password).await?;

        let user = self
            .users
            .create_user(&request.email, &hashed)
            .await
            .map_err(|e| match e {
                PersistenceError::Constraint(_) => {
                    log::info!("중복 이메일로 회원가입 시도");
                    AppError::ConflictError("Email already registered".to_string())
                }
                other => other.into(),
            })?;

        log::info!("새 사용자 생성 - ID: {}", user.id);
        Ok(UserResponse::from(user))
    }

    /// 사용자를 프리미엄으로 표시합니다. 이미 프리미엄이어도 성공합니다.
    pub async fn upgrade_to_chirpy_red(&self, user_id: Uuid) -> AppResult<()> {
        if !self.users.upgrade_to_chirpy_red(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        log::info!("Chirpy Red 업그레이드 - 사용자 ID: {}", user_id);
        Ok(())
    }

    /// 모든 사용자를 삭제합니다. 게시글과 리프레시 토큰도 연쇄 삭제됩니다.
    pub async fn delete_all_users(&self) -> AppResult<u64> {
        let deleted = self.users.delete_all().await?;
        log::warn!("전체 사용자 삭제: {}명", deleted);
        Ok(deleted)
    }
}

fn user_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(UserService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "user_service",
        constructor: user_service_constructor,
    }
}
