//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 [`Database`](crate::db::Database)를 복제해 보관하며,
//! 쓰기 메서드는 `sqlx::Executor`를 인자로 받아 트랜잭션 안에서도 호출할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let users = UserRepository::new(database.clone());
//! let user = users.find_by_id("user-id").await?;
//! ```

pub mod accounts;
pub mod sessions;
pub mod users;

/// 유니크 제약 위반이면 드라이버 메시지를 돌려줍니다.
///
/// SQLite 메시지는 `UNIQUE constraint failed: users.username` 형태이므로
/// 호출자는 테이블.컬럼 이름으로 어떤 제약인지 판별합니다.
pub(crate) fn unique_violation(error: &sqlx::Error) -> Option<String> {
    match error {
        sqlx::Error::Database(db) if db.is_unique_violation() => Some(db.message().to_string()),
        _ => None,
    }
}
