//! Database Connection Management Module
//!
//! SQLite 커넥션 풀과 스키마 마이그레이션을 담당하는 모듈입니다.
//! 리포지토리는 [`Database::pool`]로 풀에 접근하고,
//! 여러 행을 원자적으로 써야 하는 서비스는 [`Database::begin`]으로 트랜잭션을 엽니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/storefront.db"
//! export DATABASE_MAX_CONNECTIONS="5"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.database).await?;
//! database.migrate().await?;
//! ```

use std::str::FromStr;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

use crate::config::DatabaseConfig;
use crate::errors::{AppResult, ErrorContext};

/// SQLite 커넥션 풀 래퍼
///
/// `SqlitePool`은 내부적으로 `Arc`이므로 `Database`를 복제해도 같은 풀을 공유합니다.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 설정에 따라 커넥션 풀을 생성합니다.
    ///
    /// 파일 데이터베이스는 없으면 생성하며, 외래 키 제약은 항상 켜집니다.
    /// 인메모리 데이터베이스는 커넥션이 닫히면 내용이 사라지므로
    /// 풀 크기를 1로 고정하고 유휴 커넥션을 정리하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 잘못된 연결 문자열 또는 연결 실패
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .context("DATABASE_URL 파싱 실패")?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .context("데이터베이스 연결 실패")?;

        info!("✅ SQLite 연결 성공 (max_connections: {})", pool.options().get_max_connections());

        Ok(Self { pool })
    }

    /// 내장 마이그레이션을 적용합니다.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("마이그레이션 실패")?;

        info!("✅ 스키마 마이그레이션 완료");
        Ok(())
    }

    /// 새 트랜잭션을 시작합니다.
    ///
    /// 반환된 트랜잭션은 `commit` 없이 drop되면 롤백됩니다.
    pub async fn begin(&self) -> AppResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
