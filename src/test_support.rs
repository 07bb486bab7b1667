//! 테스트 공용 헬퍼

use crate::config::tests::{base_vars, load};
use crate::config::{AppConfig, DatabaseConfig};
use crate::core::context::AppContext;
use crate::db::Database;

/// 마이그레이션이 적용된 인메모리 데이터베이스
pub(crate) async fn memory_database() -> Database {
    let database = Database::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await
    .unwrap();
    database.migrate().await.unwrap();
    database
}

/// bcrypt cost 4, 인메모리 데이터베이스 설정
pub(crate) fn test_config() -> AppConfig {
    load(&base_vars()).unwrap()
}

pub(crate) async fn test_context() -> AppContext {
    AppContext::build(test_config(), memory_database().await).unwrap()
}

pub(crate) async fn count_rows(database: &Database, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(database.pool())
        .await
        .unwrap()
}
