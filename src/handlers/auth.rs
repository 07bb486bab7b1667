//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 회원가입과 로그인 엔드포인트입니다.
//! 두 엔드포인트 모두 인증 없이 접근할 수 있습니다.
//!
//! - `POST /auth/sign-up/email-password` → 201 Created
//! - `POST /auth/sign-in/email-password` → 200 OK
//!
//! 응답 본문은 `{ accessToken, refreshToken, expiresAt }` 입니다.
use actix_web::{post, web, HttpResponse};

use crate::domain::dto::users::request::{EmailPasswordSignInRequest, EmailPasswordSignUpRequest};
use crate::domain::models::auth::client_info::ClientInfo;
use crate::errors::AppError;
use crate::services::auth::CredentialService;

/// 이메일 회원가입 핸들러
///
/// # Endpoint
/// `POST /auth/sign-up/email-password`
#[post("/sign-up/email-password")]
pub async fn sign_up_email_password(
    credentials: web::Data<CredentialService>,
    client: ClientInfo,
    payload: web::Json<EmailPasswordSignUpRequest>,
) -> Result<HttpResponse, AppError> {
    let response = credentials.sign_up(payload.into_inner(), client).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 이메일 로그인 핸들러
///
/// 계정이 없거나 비밀번호가 틀린 경우 모두 같은 422 응답을 반환합니다.
///
/// # Endpoint
/// `POST /auth/sign-in/email-password`
#[post("/sign-in/email-password")]
pub async fn sign_in_email_password(
    credentials: web::Data<CredentialService>,
    client: ClientInfo,
    payload: web::Json<EmailPasswordSignInRequest>,
) -> Result<HttpResponse, AppError> {
    let response = credentials.sign_in(payload.into_inner(), client).await?;

    Ok(HttpResponse::Ok().json(response))
}
