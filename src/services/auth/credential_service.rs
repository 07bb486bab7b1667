//! # 이메일/비밀번호 인증 서비스
//!
//! 회원가입과 로그인 흐름을 조율합니다.
//!
//! ## 회원가입
//!
//! 1. 입력값 검증
//! 2. 이메일 계정 중복 확인 → `DuplicateEmail`
//! 3. 비밀번호 해싱
//! 4. 사용자 + 이메일 계정을 하나의 트랜잭션으로 저장
//! 5. 액세스/리프레시 토큰 발급
//! 6. 리프레시 토큰으로 세션 저장
//!
//! ## 로그인
//!
//! 이메일 계정 조회와 비밀번호 비교 중 어느 단계에서 실패하든
//! 항상 같은 `UserNotFound` 에러를 반환합니다. 계정이 없어도 더미 해시와
//! 비교하므로 응답 시간도 같은 bcrypt 비용을 가집니다. 이전 세션은 유지되며
//! 로그인마다 새 세션이 추가됩니다.

use log::{info, warn};
use validator::Validate;

use crate::db::Database;
use crate::domain::dto::tokens::AuthTokensResponse;
use crate::domain::dto::users::request::{EmailPasswordSignInRequest, EmailPasswordSignUpRequest};
use crate::domain::entities::accounts::account::{Account, BcryptHash};
use crate::domain::entities::sessions::session::Session;
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::client_info::ClientInfo;
use crate::domain::models::token::token::JwtPayload;
use crate::errors::{AppError, AppResult};
use crate::repositories::accounts::AccountRepository;
use crate::repositories::sessions::SessionRepository;
use crate::repositories::users::UserRepository;
use crate::services::auth::password_service::PasswordService;
use crate::services::auth::token_service::TokenService;
use crate::utils::string_utils::mask_email;

/// 이메일/비밀번호 인증 서비스
pub struct CredentialService {
    database: Database,
    users: UserRepository,
    accounts: AccountRepository,
    sessions: SessionRepository,
    passwords: PasswordService,
    tokens: TokenService,
}

impl CredentialService {
    pub fn new(database: Database, passwords: PasswordService, tokens: TokenService) -> Self {
        Self {
            users: UserRepository::new(database.clone()),
            accounts: AccountRepository::new(database.clone()),
            sessions: SessionRepository::new(database.clone()),
            database,
            passwords,
            tokens,
        }
    }

    /// 이메일/비밀번호 회원가입
    ///
    /// # Arguments
    ///
    /// * `request` - 이메일, 비밀번호, 이름, 사용자명
    /// * `client` - 세션에 기록할 클라이언트 정보
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 형식 오류
    /// * `AppError::DuplicateEmail` - 이미 이메일 계정이 존재
    /// * `AppError::DuplicateUsername` - 사용자명 중복
    pub async fn sign_up(
        &self,
        request: EmailPasswordSignUpRequest,
        client: ClientInfo,
    ) -> AppResult<AuthTokensResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if self.accounts.exists_email_account(&request.email).await? {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = self.passwords.hash(&request.password).await?;

        let user = User::new_member(request.name, request.username, Some(request.email.clone()));
        let account = Account::new_email(user.id.clone(), request.email, password_hash);

        self.register_member(&user, &account).await?;

        let payload = JwtPayload {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
        };
        let response = self.start_session(&payload, &account.id, &client).await?;

        info!(
            "✅ 회원가입 완료: user_id={}, email={}",
            user.id,
            mask_email(&account.account_id)
        );

        Ok(response)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 형식 오류
    /// * `AppError::UserNotFound` - 계정 없음, 비밀번호 불일치, 해시 손상
    pub async fn sign_in(
        &self,
        request: EmailPasswordSignInRequest,
        client: ClientInfo,
    ) -> AppResult<AuthTokensResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let masked = mask_email(&request.email);

        let Some(credential) = self.accounts.find_email_credential(&request.email).await? else {
            // 계정이 있을 때와 같은 bcrypt 비용을 치른 뒤 실패
            self.password_matches(&request.password, None).await;
            warn!("로그인 실패 (계정 없음): {}", masked);
            return Err(AppError::UserNotFound);
        };

        if !self.password_matches(&request.password, credential.password_hash.as_ref()).await {
            warn!("로그인 실패 (비밀번호 불일치): {}", masked);
            return Err(AppError::UserNotFound);
        }

        let payload = JwtPayload {
            sub: credential.user_id.clone(),
            email: credential.user_email,
            role: credential.role,
            status: credential.status,
        };
        let response = self
            .start_session(&payload, &credential.account_key, &client)
            .await?;

        info!("✅ 로그인 완료: user_id={}, email={}", credential.user_id, masked);

        Ok(response)
    }

    /// 사용자와 이메일 계정을 하나의 트랜잭션으로 저장합니다.
    ///
    /// 어느 쪽이든 실패하면 트랜잭션이 drop되며 롤백됩니다.
    async fn register_member(&self, user: &User, account: &Account) -> AppResult<()> {
        let mut tx = self.database.begin().await?;

        self.users.insert(&mut *tx, user).await?;
        self.accounts.insert(&mut *tx, account).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn password_matches(&self, plaintext: &str, hash: Option<&BcryptHash>) -> bool {
        match hash {
            Some(hash) => self.passwords.compare(plaintext, hash).await,
            None => self.passwords.compare_dummy(plaintext).await,
        }
    }

    /// 토큰 쌍을 발급하고 리프레시 토큰으로 세션을 저장합니다.
    async fn start_session(
        &self,
        payload: &JwtPayload,
        account_id: &str,
        client: &ClientInfo,
    ) -> AppResult<AuthTokensResponse> {
        let pair = self.tokens.issue_pair(payload)?;

        let session = Session::new(payload.sub.clone(), account_id.to_string(), &pair.refresh, client);
        self.sessions.insert(self.database.pool(), &session).await?;

        Ok(AuthTokensResponse::from(pair))
    }
}
