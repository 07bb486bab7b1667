//! # 계정 리포지토리 구현
//!
//! `accounts` 테이블의 데이터 액세스 계층입니다.
//! 이메일 로그인에 필요한 계정+사용자 조인 조회를 제공합니다.

use sqlx::{Executor, Sqlite};

use crate::db::Database;
use crate::domain::entities::accounts::account::{Account, AccountProvider, BcryptHash};
use crate::domain::entities::users::user::{UserRole, UserStatus};
use crate::errors::{AppError, AppResult};
use crate::repositories::unique_violation;

/// 이메일 로그인 검증에 필요한 계정과 사용자 정보
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmailCredential {
    /// `accounts.id`
    pub account_key: String,
    pub password_hash: Option<BcryptHash>,
    pub user_id: String,
    pub user_email: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
}

/// 계정 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct AccountRepository {
    db: Database,
}

impl AccountRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 계정 저장
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateEmail` - 같은 프로바이더에 같은 계정 식별자가 이미 존재
    /// * `AppError::ConflictError` - 사용자가 이미 같은 프로바이더 계정을 보유
    /// * `AppError::DatabaseError` - 기타 데이터베이스 오류
    pub async fn insert<'e, E>(&self, executor: E, account: &Account) -> AppResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                id, account_id, provider_id, email, user_id,
                access_token, refresh_token, access_token_expires_at, refresh_token_expires_at,
                scope, password, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&account.id)
        .bind(&account.account_id)
        .bind(account.provider_id)
        .bind(&account.email)
        .bind(&account.user_id)
        .bind(&account.access_token)
        .bind(&account.refresh_token)
        .bind(account.access_token_expires_at)
        .bind(account.refresh_token_expires_at)
        .bind(&account.scope)
        .bind(&account.password)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(executor)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(message) if message.contains("accounts.account_id") => AppError::DuplicateEmail,
            Some(_) => AppError::ConflictError("이미 연결된 로그인 수단입니다".to_string()),
            None => AppError::from(e),
        })?;

        Ok(())
    }

    /// 이메일 프로바이더 계정 존재 여부
    pub async fn exists_email_account(&self, email: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM accounts WHERE provider_id = ? AND account_id = ?",
        )
        .bind(AccountProvider::Email)
        .bind(email)
        .fetch_one(self.db.pool())
        .await?;

        Ok(count > 0)
    }

    /// 이메일 계정과 소유 사용자를 함께 조회
    pub async fn find_email_credential(&self, email: &str) -> AppResult<Option<EmailCredential>> {
        let credential = sqlx::query_as::<_, EmailCredential>(
            r#"
            SELECT a.id AS account_key,
                   a.password AS password_hash,
                   u.id AS user_id,
                   u.email AS user_email,
                   u.role AS role,
                   u.status AS status
            FROM accounts a
            INNER JOIN users u ON u.id = a.user_id
            WHERE a.provider_id = ? AND a.account_id = ?
            LIMIT 1
            "#,
        )
        .bind(AccountProvider::Email)
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(credential)
    }
}
