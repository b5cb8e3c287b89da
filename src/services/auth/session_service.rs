//! 세션 오케스트레이션 서비스
//!
//! 비밀번호 관리자, 액세스 토큰 발급기, 리프레시 토큰 관리자, 사용자 저장소를 묶어
//! 로그인/리프레시/폐기/자격 증명 변경 흐름을 구성합니다.
//!
//! ## 로그인 흐름
//!
//! ```text
//! email ──► find_credential_by_email ──► verify_password ──┬─► issue_access_token (3600s)
//!                                                          └─► issue refresh token (60d, 저장)
//! ```
//!
//! 검증이 성공하기 전에는 리프레시 토큰이 저장되지 않습니다.
//! 존재하지 않는 이메일과 잘못된 비밀번호는 같은 401 메시지로 응답합니다.

use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::{
    domain::dto::{
        tokens::AccessTokenResponse,
        users::{LoginResponse, UpdateUserRequest, UserResponse},
    },
    errors::{AppError, AppResult, AuthError, PersistenceError, LOGIN_FAILED_MESSAGE},
    repositories::users::{UserRepository, UserStore},
    services::auth::{PasswordService, RefreshTokenService, TokenService},
};

pub struct SessionService {
    users: Arc<dyn UserStore>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
    refresh_tokens: Arc<RefreshTokenService>,
}

static SESSION_SERVICE_INSTANCE: OnceCell<Arc<SessionService>> = OnceCell::new();

impl SessionService {
    pub fn new(
        users: Arc<dyn UserStore>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
        refresh_tokens: Arc<RefreshTokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
            refresh_tokens,
        }
    }

    pub fn instance() -> Arc<Self> {
        SESSION_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    UserRepository::instance(),
                    PasswordService::instance(),
                    TokenService::instance(),
                    RefreshTokenService::instance(),
                ))
            })
            .clone()
    }

    /// 이메일/비밀번호로 로그인하고 프로필과 두 토큰을 반환합니다.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let login_failed = || AppError::AuthenticationError(LOGIN_FAILED_MESSAGE.to_string());

        let credential = self
            .users
            .find_credential_by_email(email)
            .await?
            .ok_or_else(|| {
                log::debug!("로그인 실패: 존재하지 않는 이메일");
                login_failed()
            })?;

        self.passwords
            .verify_password(password, &credential.hashed_password)
            .await
            .map_err(|e| {
                log::debug!("로그인 실패 - 사용자: {}, 원인: {}", credential.id, e);
                login_failed()
            })?;

        let user = self
            .users
            .find_by_id(credential.id)
            .await?
            .ok_or_else(login_failed)?;

        let token = self.tokens.issue_access_token(user.id)?;
        let refresh_token = self.refresh_tokens.issue(user.id).await?;

        log::info!("로그인 성공 - 사용자 ID: {}", user.id);

        Ok(LoginResponse {
            user: UserResponse::from(user),
            token,
            refresh_token: refresh_token.token,
        })
    }

    /// 사용 가능한 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 리프레시 토큰 자체는 교체되거나 연장되지 않습니다.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AccessTokenResponse> {
        let stored = self.refresh_tokens.lookup(refresh_token).await?;

        if !stored.is_usable(Utc::now()) {
            log::debug!(
                "사용할 수 없는 리프레시 토큰 - 사용자: {}, 폐기됨: {}",
                stored.user_id,
                stored.is_revoked()
            );
            return Err(AuthError::Unauthorized.into());
        }

        let token = self.tokens.issue_access_token(stored.user_id)?;
        Ok(AccessTokenResponse::new(token))
    }

    /// 리프레시 토큰을 폐기합니다. 알 수 없는 토큰은 401입니다.
    pub async fn revoke(&self, refresh_token: &str) -> AppResult<()> {
        let stored = self.refresh_tokens.lookup(refresh_token).await?;
        self.refresh_tokens.revoke(&stored.token).await?;

        log::info!("리프레시 토큰 폐기 - 사용자 ID: {}", stored.user_id);
        Ok(())
    }

    /// 인증된 사용자의 이메일/비밀번호를 교체합니다.
    pub async fn update_credentials(&self, user_id: Uuid, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let hashed_password = match request.password.as_deref() {
            Some(password) => Some(self.passwords.hash_password(password).await?),
            None => None,
        };

        let updated = self
            .users
            .update_credentials(user_id, request.email.as_deref(), hashed_password.as_deref())
            .await
            .map_err(|e| match e {
                PersistenceError::Constraint(_) => AppError::ConflictError("Email already in use".to_string()),
                other => other.into(),
            })?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        log::info!("자격 증명 변경 - 사용자 ID: {}", user_id);
        Ok(UserResponse::from(updated))
    }
}

fn session_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(SessionService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "session_service",
        constructor: session_service_constructor,
    }
}
