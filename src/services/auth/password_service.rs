//! 비밀번호 해싱/검증 서비스
//!
//! bcrypt는 CPU 집약적이므로 `actix_web::web::block`으로 블로킹 스레드 풀에서 실행합니다.
//! 솔트는 해시 문자열에 내장되며, 원문 비밀번호는 로그에 남기지 않습니다.

use std::sync::Arc;

use actix_web::web;
use once_cell::sync::OnceCell;

use crate::{
    config::{AppConfig, PasswordConfig},
    core::registry::ServiceLocator,
    errors::CredentialError,
};

/// bcrypt가 처리하는 최대 입력 길이 (바이트)
pub const MAX_PASSWORD_BYTES: usize = 72;

pub struct PasswordService {
    cost: u32,
}

static PASSWORD_SERVICE_INSTANCE: OnceCell<Arc<PasswordService>> = OnceCell::new();

impl PasswordService {
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    pub fn instance() -> Arc<Self> {
        PASSWORD_SERVICE_INSTANCE
            .get_or_init(|| {
                let config = ServiceLocator::get::<AppConfig>();
                Arc::new(Self::new(&config.password))
            })
            .clone()
    }

    /// 비밀번호를 bcrypt 해시 문자열로 변환합니다.
    ///
    /// 72바이트를 넘거나 NUL 문자를 포함한 입력은 잘리지 않고 거부됩니다.
    pub async fn hash_password(&self, password: &str) -> Result<String, CredentialError> {
        check_input(password)?;

        let password = password.to_string();
        let cost = self.cost;

        web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| CredentialError::Unprocessable(format!("blocking pool error: {}", e)))?
            .map_err(|e| CredentialError::Unprocessable(e.to_string()))
    }

    /// 비밀번호가 해시와 일치하는지 확인합니다.
    ///
    /// 불일치는 `Mismatch`, 손상된 해시는 `Unprocessable`이며 호출자는 둘을 구분하지 않습니다.
    pub async fn verify_password(&self, password: &str, hashed: &str) -> Result<(), CredentialError> {
        check_input(password)?;

        let password = password.to_string();
        let hashed = hashed.to_string();

        let matched = web::block(move || bcrypt::verify(password, &hashed))
            .await
            .map_err(|e| CredentialError::Unprocessable(format!("blocking pool error: {}", e)))?
            .map_err(|e| CredentialError::Unprocessable(e.to_string()))?;

        if matched {
            Ok(())
        } else {
            Err(CredentialError::Mismatch)
        }
    }
}

fn check_input(password: &str) -> Result<(), CredentialError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(CredentialError::Unprocessable(format!(
            "password exceeds {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }
    if password.contains('\0') {
        return Err(CredentialError::Unprocessable("password contains NUL".to_string()));
    }
    Ok(())
}

fn password_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(PasswordService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "password_service",
        constructor: password_service_constructor,
    }
}
