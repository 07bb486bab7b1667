//! User Profile HTTP Handlers
//!
//! - `GET /users/me` - 로그인한 사용자 본인 프로필
//! - `GET /users/{user_id}` - 임의 사용자 프로필 (ADMIN 전용, 게이트에서 검사)
use actix_web::{get, web, HttpResponse};

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 현재 사용자 프로필 조회
#[get("/me")]
pub async fn get_me(
    users: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = users.get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// ID로 사용자 프로필 조회
#[get("/{user_id}")]
pub async fn get_user(
    users: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = users.get_profile(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(profile))
}
