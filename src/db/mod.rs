//! Database Connection Management Module
//!
//! PostgreSQL 연결 풀과 스키마 마이그레이션을 관리하는 모듈입니다.
//! 마이그레이션 SQL은 `migrations/` 디렉터리에서 바이너리에 내장됩니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//! use crate::core::registry::ServiceLocator;
//!
//! let database = Database::new(&config.database).await?;
//! database.migrate().await?;
//! ServiceLocator::set(Arc::new(database));
//! ```

use std::time::Duration;

use log::info;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// PostgreSQL 연결 풀 래퍼
///
/// 리포지토리 계층은 이 구조체를 통해서만 풀에 접근합니다.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 새 연결 풀을 생성하고 `SELECT 1`로 연결 상태를 검증합니다.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&config.url)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        info!("✅ PostgreSQL 연결 성공 (max_connections={})", config.max_connections);

        Ok(Self { pool })
    }

    /// 내장된 마이그레이션을 모두 적용합니다.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("✅ 데이터베이스 마이그레이션 완료");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
