//! # Configuration Module
//!
//! 애플리케이션 설정을 시작 시점에 한 번 읽어 불변 [`AppConfig`]로 만듭니다.
//! 필수 환경 변수가 하나라도 빠지면 [`ConfigError`]를 반환하며,
//! `main`은 이를 치명적 오류로 취급하고 서버를 띄우지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, CORS, Rate Limiting, 패스워드 해싱
//! - [`auth_config`] - JWT 액세스/리프레시 토큰 서명 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("bind: {}", config.server.bind_address());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// 설정 로딩 실패
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("필수 환경 변수가 설정되지 않았습니다: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// 값은 있지만 파싱할 수 없음
    #[error("환경 변수 {key}의 값이 올바르지 않습니다: {value}")]
    Invalid { key: &'static str, value: String },
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - 필수 변수 누락 (누락된 변수 전체를 나열), 또는 `ALLOWED_ORIGINS`에 Origin이 없음
    /// * `ConfigError::Invalid` - 숫자 변수 파싱 실패 또는 범위 초과
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수에서 설정을 읽습니다.
    ///
    /// 테스트에서는 프로세스 환경을 건드리지 않고 `HashMap` 기반 조회 함수를 넘깁니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut source = EnvSource::new(&lookup);

        let database_url = source.required("DATABASE_URL");
        let allowed_origins = source.required("ALLOWED_ORIGINS");
        let access_secret = source.required("JWT_SECRET");
        let refresh_secret = source.required("REFRESH_TOKEN_SECRET");
        source.check_missing()?;

        let environment = Environment::from_name(
            &source.optional("ENVIRONMENT").unwrap_or_else(|| "production".to_string()),
        );

        let max_connections =
            source.parsed("DATABASE_MAX_CONNECTIONS", DatabaseConfig::DEFAULT_MAX_CONNECTIONS)?;
        let database = DatabaseConfig {
            url: database_url,
            max_connections: max_connections.max(1),
        };

        let server = ServerConfig {
            host: source
                .optional("HOST")
                .unwrap_or_else(|| ServerConfig::DEFAULT_HOST.to_string()),
            port: source.parsed("PORT", ServerConfig::DEFAULT_PORT)?,
        };

        let jwt = JwtConfig {
            access: TokenSettings {
                secret: access_secret,
                expires_in_secs: source
                    .expires_in("JWT_EXPIRES_IN", JwtConfig::DEFAULT_ACCESS_EXPIRES_IN)?,
            },
            refresh: TokenSettings {
                secret: refresh_secret,
                expires_in_secs: source
                    .expires_in("REFRESH_TOKEN_EXPIRES_IN", JwtConfig::DEFAULT_REFRESH_EXPIRES_IN)?,
            },
        };

        let bcrypt_cost = source.parsed("BCRYPT_COST", PasswordConfig::DEFAULT_COST)?;
        if !PasswordConfig::is_valid_cost(bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let rate_limit = RateLimitConfig {
            per_second: source.parsed("RATE_LIMIT_PER_SECOND", RateLimitConfig::DEFAULT_PER_SECOND)?,
            burst_size: source.parsed("RATE_LIMIT_BURST_SIZE", RateLimitConfig::DEFAULT_BURST_SIZE)?,
        };

        // "," 처럼 항목이 하나도 없으면 누락으로 취급
        let cors = CorsConfig::parse(&allowed_origins);
        if cors.allowed_origins.is_empty() {
            return Err(ConfigError::Missing(vec!["ALLOWED_ORIGINS"]));
        }

        Ok(Self {
            environment,
            server,
            database,
            cors,
            rate_limit,
            jwt,
            password: PasswordConfig { bcrypt_cost },
        })
    }
}

/// 조회 함수 위에서 누락 변수를 모아 한 번에 보고하는 헬퍼
struct EnvSource<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
    missing: Vec<&'static str>,
}

impl<'a> EnvSource<'a> {
    fn new(lookup: &'a dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            lookup,
            missing: Vec::new(),
        }
    }

    /// 공백뿐인 값은 설정되지 않은 것으로 취급
    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&mut self, key: &'static str) -> String {
        match self.optional(key) {
            Some(value) => value,
            None => {
                self.missing.push(key);
                String::new()
            }
        }
    }

    fn check_missing(&mut self) -> Result<(), ConfigError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(std::mem::take(&mut self.missing)))
        }
    }

    /// 토큰 만료 시간 (초). 범위를 벗어나면 시작 시점에 실패합니다.
    fn expires_in(&self, key: &'static str, default: i64) -> Result<i64, ConfigError> {
        let secs = self.parsed(key, default)?;
        if !JwtConfig::is_valid_expires_in(secs) {
            return Err(ConfigError::Invalid {
                key,
                value: secs.to_string(),
            });
        }
        Ok(secs)
    }

    fn parsed<T: FromStr>(&self, key: &'static str, default: T) -> Result<T, ConfigError> {
        match self.optional(key) {
            None => Ok(default),
            Some(value) => value
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid { key, value }),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    pub(crate) fn base_vars() -> HashMap<&'static str, String> {
        HashMap::from([
            ("DATABASE_URL", "sqlite::memory:".to_string()),
            ("ALLOWED_ORIGINS", "http://localhost:3000".to_string()),
            ("JWT_SECRET", "access-secret-for-tests".to_string()),
            ("REFRESH_TOKEN_SECRET", "refresh-secret-for-tests".to_string()),
            ("BCRYPT_COST", "4".to_string()),
        ])
    }

    pub(crate) fn load(vars: &HashMap<&'static str, String>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_applied() {
        let mut vars = base_vars();
        vars.remove("BCRYPT_COST");
        let config = load(&vars).unwrap();

        assert_eq!(config.jwt.access.expires_in_secs, 900);
        assert_eq!(config.jwt.refresh.expires_in_secs, 604_800);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.password.bcrypt_cost, 10);
        assert_eq!(config.rate_limit.per_second, 100);
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_all_missing_variables_reported() {
        let mut vars = base_vars();
        vars.remove("DATABASE_URL");
        vars.remove("REFRESH_TOKEN_SECRET");

        match load(&vars) {
            Err(ConfigError::Missing(keys)) => {
                assert_eq!(keys, vec!["DATABASE_URL", "REFRESH_TOKEN_SECRET"]);
            }
            other => panic!("expected missing error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut vars = base_vars();
        vars.insert("JWT_SECRET", "   ".to_string());

        assert!(matches!(load(&vars), Err(ConfigError::Missing(keys)) if keys == vec!["JWT_SECRET"]));
    }

    #[test]
    fn test_unparseable_number_is_fatal() {
        let mut vars = base_vars();
        vars.insert("JWT_EXPIRES_IN", "fifteen minutes".to_string());

        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { key: "JWT_EXPIRES_IN", .. })
        ));
    }

    #[test]
    fn test_out_of_range_bcrypt_cost_rejected() {
        let mut vars = base_vars();
        vars.insert("BCRYPT_COST", "40".to_string());

        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { key: "BCRYPT_COST", .. })
        ));
    }

    #[test]
    fn test_custom_token_windows() {
        let mut vars = base_vars();
        vars.insert("JWT_EXPIRES_IN", "60".to_string());
        vars.insert("REFRESH_TOKEN_EXPIRES_IN", "3600".to_string());
        let config = load(&vars).unwrap();

        assert_eq!(config.jwt.access.expires_in_secs, 60);
        assert_eq!(config.jwt.refresh.expires_in_secs, 3600);
        assert_ne!(config.jwt.access.secret, config.jwt.refresh.secret);
    }

    #[test]
    fn test_token_windows_out_of_range_rejected() {
        for (key, value) in [
            ("JWT_EXPIRES_IN", "0"),
            ("JWT_EXPIRES_IN", "-60"),
            ("JWT_EXPIRES_IN", "9223372036854775807"),
            ("REFRESH_TOKEN_EXPIRES_IN", "31536001"),
        ] {
            let mut vars = base_vars();
            vars.insert(key, value.to_string());

            match load(&vars) {
                Err(ConfigError::Invalid { key: rejected, .. }) => assert_eq!(rejected, key),
                other => panic!("expected invalid {} for {}, got {:?}", key, value, other),
            }
        }
    }

    #[test]
    fn test_empty_origin_list_counts_as_missing() {
        let mut vars = base_vars();
        vars.insert("ALLOWED_ORIGINS", " , ,".to_string());

        assert!(matches!(
            load(&vars),
            Err(ConfigError::Missing(keys)) if keys == vec!["ALLOWED_ORIGINS"]
        ));
    }
}
