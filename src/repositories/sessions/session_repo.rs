//! # 세션 리포지토리 구현
//!
//! 발급된 리프레시 토큰을 `sessions` 테이블에 기록합니다.

use sqlx::{Executor, Sqlite};

use crate::db::Database;
use crate::domain::entities::sessions::session::Session;
use crate::errors::{AppError, AppResult};
use crate::repositories::unique_violation;

#[derive(Clone)]
pub struct SessionRepository {
    db: Database,
}

impl SessionRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 세션 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 토큰 문자열이 이미 저장됨
    /// * `AppError::DatabaseError` - 사용자/계정 참조 실패 등 기타 오류
    pub async fn insert<'e, E>(&self, executor: E, session: &Session) -> AppResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, token, expires_at, ip_address, user_agent,
                user_id, account_id, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&session.id)
        .bind(&session.token)
        .bind(session.expires_at)
        .bind(&session.ip_address)
        .bind(&session.user_agent)
        .bind(&session.user_id)
        .bind(&session.account_id)
        .bind(session.created_at)
        .bind(session.updated_at)
        .execute(executor)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(_) => AppError::ConflictError("이미 등록된 세션 토큰입니다".to_string()),
            None => AppError::from(e),
        })?;

        Ok(())
    }

    /// 토큰 문자열로 세션 조회
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, token, expires_at, ip_address, user_agent,
                   user_id, account_id, created_at, updated_at
            FROM sessions
            WHERE token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(session)
    }

    /// 사용자의 세션 수
    pub async fn count_by_user(&self, user_id: &str) -> AppResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }

    /// 토큰 문자열로 세션 삭제, 삭제 여부 반환
    pub async fn delete_by_token(&self, token: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
