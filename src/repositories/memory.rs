//! 테스트용 인메모리 저장소
//!
//! PostgreSQL 없이 서비스 계층을 검증하기 위해 세 저장소 trait을 모두 구현합니다.
//! 유니크 이메일, 기본 키 충돌, 연쇄 삭제 같은 테이블 제약도 흉내 냅니다.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::dto::chirps::SortOrder;
use crate::domain::entities::{chirps::Chirp, tokens::RefreshToken, users::{User, UserCredential}};
use crate::errors::PersistenceError;
use crate::repositories::{chirps::ChirpStore, tokens::RefreshTokenStore, users::UserStore};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    chirps: Vec<Chirp>,
    refresh_tokens: HashMap<String, RefreshToken>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    /// `true`이면 모든 호출이 `Unavailable`로 실패합니다.
    offline: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    pub fn refresh_token_count(&self) -> usize {
        self.tables.lock().unwrap().refresh_tokens.len()
    }

    pub fn chirp_count(&self) -> usize {
        self.tables.lock().unwrap().chirps.len()
    }

    fn tables(&self) -> Result<std::sync::MutexGuard<'_, Tables>, PersistenceError> {
        if *self.offline.lock().unwrap() {
            return Err(PersistenceError::Unavailable("connection refused".to_string()));
        }
        Ok(self.tables.lock().unwrap())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User, PersistenceError> {
        let mut tables = self.tables()?;
        if tables.users.iter().any(|u| u.email == email) {
            return Err(PersistenceError::Constraint("users_email_key".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
            is_chirpy_red: false,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_credential_by_email(&self, email: &str) -> Result<Option<UserCredential>, PersistenceError> {
        let tables = self.tables()?;
        Ok(tables.users.iter().find(|u| u.email == email).map(User::credential))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, PersistenceError> {
        let tables = self.tables()?;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: Option<&str>,
        hashed_password: Option<&str>,
    ) -> Result<Option<User>, PersistenceError> {
        let mut tables = self.tables()?;
        if let Some(email) = email {
            if tables.users.iter().any(|u| u.email == email && u.id != id) {
                return Err(PersistenceError::Constraint("users_email_key".to_string()));
            }
        }

        let Some(user) = tables.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(email) = email {
            user.email = email.to_string();
        }
        if let Some(hashed) = hashed_password {
            user.hashed_password = hashed.to_string();
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool, PersistenceError> {
        let mut tables = self.tables()?;
        match tables.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.is_chirpy_red = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_all(&self) -> Result<u64, PersistenceError> {
        let mut tables = self.tables()?;
        let count = tables.users.len() as u64;
        tables.users.clear();
        tables.chirps.clear();
        tables.refresh_tokens.clear();
        Ok(count)
    }
}

#[async_trait]
impl RefreshTokenStore for MemoryStore {
    async fn create_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshToken, PersistenceError> {
        let mut tables = self.tables()?;
        if tables.refresh_tokens.contains_key(token) {
            return Err(PersistenceError::Constraint("refresh_tokens_pkey".to_string()));
        }
        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(PersistenceError::Constraint("refresh_tokens_user_id_fkey".to_string()));
        }

        let now = Utc::now();
        let row = RefreshToken {
            token: token.to_string(),
            created_at: now,
            updated_at: now,
            user_id,
            expires_at,
            revoked_at: None,
        };
        tables.refresh_tokens.insert(token.to_string(), row.clone());
        Ok(row)
    }

    async fn get_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, PersistenceError> {
        let tables = self.tables()?;
        Ok(tables.refresh_tokens.get(token).cloned())
    }

    async fn revoke_refresh_token(&self, token: &str) -> Result<bool, PersistenceError> {
        let mut tables = self.tables()?;
        match tables.refresh_tokens.get_mut(token) {
            Some(row) if row.revoked_at.is_none() => {
                let now = Utc::now();
                row.revoked_at = Some(now);
                row.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl ChirpStore for MemoryStore {
    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp, PersistenceError> {
        let mut tables = self.tables()?;
        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(PersistenceError::Constraint("chirps_user_id_fkey".to_string()));
        }

        let now = Utc::now();
        let chirp = Chirp {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.to_string(),
            user_id,
        };
        tables.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn find_chirp_by_id(&self, id: Uuid) -> Result<Option<Chirp>, PersistenceError> {
        let tables = self.tables()?;
        Ok(tables.chirps.iter().find(|c| c.id == id).cloned())
    }

    async fn list_chirps(&self, author_id: Option<Uuid>, sort: SortOrder) -> Result<Vec<Chirp>, PersistenceError> {
        let tables = self.tables()?;
        // 삽입 순서가 곧 created_at 순서
        let mut chirps: Vec<Chirp> = tables
            .chirps
            .iter()
            .filter(|c| author_id.is_none_or(|author| c.user_id == author))
            .cloned()
            .collect();
        if sort == SortOrder::Desc {
            chirps.reverse();
        }
        Ok(chirps)
    }

    async fn delete_chirp(&self, id: Uuid) -> Result<bool, PersistenceError> {
        let mut tables = self.tables()?;
        let before = tables.chirps.len();
        tables.chirps.retain(|c| c.id != id);
        Ok(tables.chirps.len() < before)
    }
}
