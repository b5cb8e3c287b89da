//! 결제 제공자(Polka) 웹훅 서비스
//!
//! `Authorization: ApiKey <key>` 헤더를 설정된 키와 상수 시간으로 비교한 뒤
//! 이벤트를 처리합니다. 관심 없는 이벤트는 조용히 무시하고 204로 응답합니다.

use std::sync::Arc;

use actix_web::http::header::HeaderMap;
use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    core::registry::ServiceLocator,
    domain::dto::webhooks::PolkaEvent,
    errors::{AppError, AppResult, AuthError},
    services::{auth::extract_api_key, users::UserService},
};

pub struct PolkaWebhookService {
    api_key: String,
    users: Arc<UserService>,
}

static POLKA_WEBHOOK_SERVICE_INSTANCE: OnceCell<Arc<PolkaWebhookService>> = OnceCell::new();

impl PolkaWebhookService {
    pub fn new(api_key: impl Into<String>, users: Arc<UserService>) -> Self {
        Self {
            api_key: api_key.into(),
            users,
        }
    }

    pub fn instance() -> Arc<Self> {
        POLKA_WEBHOOK_SERVICE_INSTANCE
            .get_or_init(|| {
                let config = ServiceLocator::get::<AppConfig>();
                Arc::new(Self::new(config.polka.api_key.clone(), UserService::instance()))
            })
            .clone()
    }

    /// 요청 헤더의 API 키를 검증합니다. 키가 설정되지 않았으면 모든 요청을 거부합니다.
    pub fn verify_api_key(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let provided = extract_api_key(headers)?;

        if self.api_key.is_empty() || !constant_time_compare(&provided, &self.api_key) {
            log::warn!("웹훅 API 키 불일치");
            return Err(AuthError::Unauthorized);
        }
        Ok(())
    }

    /// 이벤트를 처리합니다.
    ///
    /// `user.upgraded`만 처리하며 대상 사용자가 없거나 ID가 잘못되었으면 404입니다.
    pub async fn handle_event(&self, event: PolkaEvent) -> AppResult<()> {
        if !event.is_user_upgraded() {
            log::debug!("무시된 웹훅 이벤트: {}", event.event);
            return Ok(());
        }

        let user_id = Uuid::parse_str(&event.data.user_id)
            .map_err(|_| AppError::NotFound("User not found".to_string()))?;

        self.users.upgrade_to_chirpy_red(user_id).await
    }
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

fn polka_webhook_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(PolkaWebhookService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "polka_webhook_service",
        constructor: polka_webhook_service_constructor,
    }
}
