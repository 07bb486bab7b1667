//! # 사용자 리포지토리 구현
//!
//! `users` 테이블의 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **실행자 주입**: 쓰기 메서드는 `sqlx::Executor`를 받아 풀과 트랜잭션 양쪽에서 동작
//! - **제약 조건 번역**: `username` 유니크 위반을 `AppError::DuplicateUsername`으로 변환

use sqlx::{Executor, Sqlite};

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::unique_violation;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **DatabaseError**: 연결 오류, 쿼리 실행 오류
/// - **DuplicateUsername**: 사용자명 유니크 인덱스 위반
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let mut tx = database.begin().await?;
/// users.insert(&mut *tx, &user).await?;
/// tx.commit().await?;
///
/// let found = users.find_by_id(&user.id).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 사용자 저장
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateUsername` - 사용자명 중복
    /// * `AppError::DatabaseError` - 기타 데이터베이스 오류
    pub async fn insert<'e, E>(&self, executor: E, user: &User) -> AppResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, username, email, role, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.role)
        .bind(user.status)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(executor)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(message) if message.contains("users.username") => AppError::DuplicateUsername,
            Some(message) => AppError::ConflictError(message),
            None => AppError::from(e),
        })?;

        Ok(())
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, username, email, role, status, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::{UserRole, UserStatus};
    use crate::test_support::{count_rows, memory_database};

    #[actix_web::test]
    async fn test_insert_and_find_by_id() {
        let repo = UserRepository::new(memory_database().await);
        let user = User::new_member("A".to_string(), "auser".to_string(), Some("a@x.com".to_string()));

        repo.insert(repo.db.pool(), &user).await.unwrap();
        let found = repo.find_by_id(&user.id).await.unwrap().unwrap();

        assert_eq!(found.username, "auser");
        assert_eq!(found.email.as_deref(), Some("a@x.com"));
        assert_eq!(found.role, UserRole::User);
        assert_eq!(found.status, UserStatus::Processing);
        assert_eq!(found.created_at, user.created_at);
    }

    #[actix_web::test]
    async fn test_find_missing_user() {
        let repo = UserRepository::new(memory_database().await);
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_username_translated() {
        let repo = UserRepository::new(memory_database().await);
        let first = User::new_member("A".to_string(), "auser".to_string(), None);
        let second = User::new_member("B".to_string(), "auser".to_string(), None);

        repo.insert(repo.db.pool(), &first).await.unwrap();
        let result = repo.insert(repo.db.pool(), &second).await;

        assert!(matches!(result, Err(AppError::DuplicateUsername)));
        assert!(repo.find_by_id(&second.id).await.unwrap().is_none());
        assert_eq!(count_rows(&repo.db, "users").await, 1);
    }
}
