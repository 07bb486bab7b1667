//! # 사용자 프로필 서비스
//!
//! 저장된 사용자 정보를 응답 DTO로 변환해 돌려줍니다.

use crate::db::Database;
use crate::domain::dto::users::response::UserResponse;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

/// 사용자 프로필 조회 서비스
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(database: Database) -> Self {
        Self {
            users: UserRepository::new(database),
        }
    }

    /// ID로 사용자 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자가 존재하지 않음
    pub async fn get_profile(&self, user_id: &str) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }
}
