//! 애플리케이션 컨텍스트
//!
//! `main`에서 한 번 생성되어 모든 워커가 공유하는 서비스 묶음입니다.
//!
//! ```rust,ignore
//! let database = Database::connect(&config.database).await?;
//! database.migrate().await?;
//!
//! let ctx = AppContext::build(config, database)?;
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(AuthMiddleware::new(ctx.policies.clone(), ctx.tokens.clone()))
//!         .configure(|cfg| configure_all_routes(cfg, &ctx))
//! })
//! ```

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::Database;
use crate::errors::AppResult;
use crate::domain::models::auth::authentication_request::RoutePolicyTable;
use crate::routes::route_policies;
use crate::services::auth::{CredentialService, PasswordService, TokenService};
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub database: Database,
    pub tokens: Arc<TokenService>,
    pub credentials: Arc<CredentialService>,
    pub users: Arc<UserService>,
    pub policies: Arc<RoutePolicyTable>,
}

impl AppContext {
    /// # Errors
    ///
    /// * `AppError::InternalError` - 설정된 bcrypt cost로 해시를 만들 수 없음
    pub fn build(config: AppConfig, database: Database) -> AppResult<Self> {
        let tokens = TokenService::new(config.jwt.clone());
        let passwords = PasswordService::new(&config.password)?;

        Ok(Self {
            credentials: Arc::new(CredentialService::new(database.clone(), passwords, tokens.clone())),
            users: Arc::new(UserService::new(database.clone())),
            tokens: Arc::new(tokens),
            policies: Arc::new(route_policies()),
            config: Arc::new(config),
            database,
        })
    }
}
