//! 핸들러 테스트용 앱 구성
//!
//! 실제 라우트 테이블을 인메모리 저장소 위의 서비스들과 함께 띄웁니다.

use std::sync::Arc;

use actix_web::web;
use chrono::Duration;
use uuid::Uuid;

use crate::config::{Environment, JwtConfig, PasswordConfig};
use crate::domain::dto::users::CreateUserRequest;
use crate::repositories::memory::MemoryStore;
use crate::routes;
use crate::services::{
    admin::AdminService,
    auth::{PasswordService, RefreshTokenService, SessionService, TokenService},
    chirps::ChirpService,
    users::UserService,
    webhooks::PolkaWebhookService,
};

pub const POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub tokens: Arc<TokenService>,
    pub session: Arc<SessionService>,
    pub users: Arc<UserService>,
    pub chirps: Arc<ChirpService>,
    pub webhooks: Arc<PolkaWebhookService>,
    pub admin: Arc<AdminService>,
}

pub struct SignedIn {
    pub user_id: Uuid,
    pub access_token: String,
    pub refresh_token: String,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_environment(Environment::Development)
    }

    pub fn with_environment(environment: Environment) -> Self {
        let store = Arc::new(MemoryStore::new());
        let passwords = Arc::new(PasswordService::new(&PasswordConfig { bcrypt_cost: 4 }));
        let tokens = Arc::new(TokenService::new(JwtConfig::new("handler-test-secret")));
        let refresh_tokens = Arc::new(RefreshTokenService::new(store.clone(), Duration::days(60)));
        let session = Arc::new(SessionService::new(
            store.clone(),
            passwords.clone(),
            tokens.clone(),
            refresh_tokens,
        ));
        let users = Arc::new(UserService::new(store.clone(), passwords));
        let chirps = Arc::new(ChirpService::new(store.clone()));
        let webhooks = Arc::new(PolkaWebhookService::new(POLKA_KEY, users.clone()));
        let admin = Arc::new(AdminService::new(environment, users.clone()));

        Self {
            store,
            tokens,
            session,
            users,
            chirps,
            webhooks,
            admin,
        }
    }

    /// `configure_all_routes`와 같은 구성을 싱글톤 대신 이 컨텍스트의 서비스로 합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.tokens.clone()))
            .app_data(web::Data::from(self.session.clone()))
            .app_data(web::Data::from(self.users.clone()))
            .app_data(web::Data::from(self.chirps.clone()))
            .app_data(web::Data::from(self.webhooks.clone()))
            .app_data(web::Data::from(self.admin.clone()));

        routes::configure_routes(cfg);
    }

    pub async fn sign_up_and_login(&self, email: &str, password: &str) -> SignedIn {
        let user = self
            .users
            .create_user(CreateUserRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap();
        let login = self.session.login(email, password).await.unwrap();

        SignedIn {
            user_id: user.id,
            access_token: login.token,
            refresh_token: login.refresh_token,
        }
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
