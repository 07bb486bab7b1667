//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로그인 수단(이메일, 소셜)은 [`Account`](crate::domain::entities::accounts::Account)로 분리되어 있고,
//! 사용자는 역할과 가입 진행 상태만 가집니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    User,
    Tutor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
            UserRole::Tutor => "TUTOR",
        }
    }
}

/// 사용자 가입 진행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum UserStatus {
    /// 가입 직후 기본 상태
    Processing,
    Completed,
    Cancelled,
}

/// 사용자 엔티티
///
/// `users` 테이블의 한 행입니다. 가입 시 생성되며 삭제되면
/// 연결된 계정과 세션이 함께 삭제됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// 고유 ID (UUID v4 문자열)
    pub id: String,
    /// 표시 이름
    pub name: String,
    /// 사용자명 (unique)
    pub username: String,
    /// 대표 이메일
    pub email: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 이메일 가입 회원 생성
    ///
    /// 역할은 `USER`, 상태는 `PROCESSING`으로 시작합니다.
    pub fn new_member(name: String, username: String, email: Option<String>) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            username,
            email,
            role: UserRole::User,
            status: UserStatus::Processing,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_defaults() {
        let user = User::new_member(
            "A".to_string(),
            "auser".to_string(),
            Some("a@x.com".to_string()),
        );

        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.status, UserStatus::Processing);
        assert_eq!(user.created_at, user.updated_at);
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn test_new_members_get_distinct_ids() {
        let first = User::new_member("A".to_string(), "a".to_string(), None);
        let second = User::new_member("B".to_string(), "b".to_string(), None);

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_role_and_status_serialize_upper_case() {
        assert_eq!(serde_json::to_string(&UserRole::Tutor).unwrap(), "\"TUTOR\"");
        assert_eq!(serde_json::to_string(&UserStatus::Processing).unwrap(), "\"PROCESSING\"");
        assert_eq!(UserRole::Admin.as_str(), "ADMIN");
    }
}
