//! 관리자 서비스: 방문 카운터와 개발 환경 초기화
//!
//! 방문 카운터는 프로세스 전역 원자 변수이며 재시작하면 0부터 다시 셉니다.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::{
    config::{AppConfig, Environment},
    core::registry::ServiceLocator,
    errors::{AppResult, AuthError},
    services::users::UserService,
};

pub struct AdminService {
    file_server_hits: AtomicU64,
    environment: Environment,
    users: Arc<UserService>,
}

static ADMIN_SERVICE_INSTANCE: OnceCell<Arc<AdminService>> = OnceCell::new();

impl AdminService {
    pub fn new(environment: Environment, users: Arc<UserService>) -> Self {
        Self {
            file_server_hits: AtomicU64::new(0),
            environment,
            users,
        }
    }

    pub fn instance() -> Arc<Self> {
        ADMIN_SERVICE_INSTANCE
            .get_or_init(|| {
                let config = ServiceLocator::get::<AppConfig>();
                Arc::new(Self::new(config.environment.clone(), UserService::instance()))
            })
            .clone()
    }

    pub fn record_hit(&self) {
        self.file_server_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.file_server_hits.load(Ordering::Relaxed)
    }

    /// `GET /admin/metrics` 응답 본문
    pub fn metrics_page(&self) -> String {
        format!(
            "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n  </body>\n</html>",
            self.hits()
        )
    }

    /// 모든 사용자를 삭제하고 카운터를 0으로 되돌립니다.
    ///
    /// 개발 환경(`PLATFORM=dev`)이 아니면 `Forbidden`입니다.
    pub async fn reset(&self) -> AppResult<u64> {
        if !self.environment.is_development() {
            log::warn!("개발 환경이 아닌 곳에서 리셋 시도: {:?}", self.environment);
            return Err(AuthError::Forbidden.into());
        }

        let deleted = self.users.delete_all_users().await?;
        self.file_server_hits.store(0, Ordering::Relaxed);
        Ok(deleted)
    }
}

fn admin_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(AdminService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "admin_service",
        constructor: admin_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    use crate::config::PasswordConfig;
    use crate::repositories::{memory::MemoryStore, users::UserStore};
    use crate::services::auth::PasswordService;

    fn service(environment: Environment) -> (Arc<MemoryStore>, AdminService) {
        let store = Arc::new(MemoryStore::new());
        let passwords = Arc::new(PasswordService::new(&PasswordConfig { bcrypt_cost: 4 }));
        let users = Arc::new(UserService::new(store.clone(), passwords));
        (store, AdminService::new(environment, users))
    }

    #[test]
    fn test_metrics_page_reports_hits() {
        let (_store, service) = service(Environment::Development);
        service.record_hit();
        service.record_hit();

        assert_eq!(service.hits(), 2);
        assert!(service.metrics_page().contains("Chirpy has been visited 2 times!"));
    }

    #[actix_web::test]
    async fn test_reset_in_dev_clears_users_and_hits() {
        let (store, service) = service(Environment::Development);
        store.create_user("a@example.com", "hash").await.unwrap();
        service.record_hit();

        assert_eq!(service.reset().await.unwrap(), 1);
        assert_eq!(service.hits(), 0);
        assert!(store.find_credential_by_email("a@example.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_reset_outside_dev_is_forbidden() {
        let (store, service) = service(Environment::Production);
        store.create_user("a@example.com", "hash").await.unwrap();
        service.record_hit();

        let err = service.reset().await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(service.hits(), 1);
        assert!(store.find_credential_by_email("a@example.com").await.unwrap().is_some());
    }
}
