//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, CORS, Rate Limiting, 패스워드 해싱 관련 설정을 관리합니다.

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 환경 이름에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `name` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite 연결 문자열 (`DATABASE_URL`)
    pub url: String,
    /// 커넥션 풀 최대 크기 (`DATABASE_MAX_CONNECTIONS`, 기본값 5)
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

    /// 인메모리 데이터베이스 여부
    ///
    /// 인메모리 SQLite는 커넥션마다 별도의 데이터베이스를 가지므로
    /// 풀 크기를 1로 고정해야 합니다.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (`BCRYPT_COST`, 기본값 10)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub const DEFAULT_COST: u32 = 10;

    /// bcrypt가 허용하는 cost 범위인지 확인합니다.
    pub fn is_valid_cost(cost: u32) -> bool {
        (4..=31).contains(&cost)
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: Self::DEFAULT_COST,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 호스트 주소 (`HOST`, 기본값 "0.0.0.0")
    pub host: String,
    /// 포트 번호 (`PORT`, 기본값 8000)
    pub port: u16,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8000;

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// 콤마로 구분된 `ALLOWED_ORIGINS` 값을 파싱합니다.
    ///
    /// 빈 항목과 앞뒤 공백은 제거됩니다.
    pub fn parse(raw: &str) -> Self {
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self { allowed_origins }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수 (`RATE_LIMIT_PER_SECOND`, 기본값 100)
    pub per_second: u64,
    /// 버스트 허용량 (`RATE_LIMIT_BURST_SIZE`, 기본값 200)
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("TEST"), Environment::Test);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let cors = CorsConfig::parse("http://localhost:3000, https://shop.example.com,,");

        assert_eq!(
            cors.allowed_origins,
            vec!["http://localhost:3000", "https://shop.example.com"]
        );
    }

    #[test]
    fn test_in_memory_detection() {
        let memory = DatabaseConfig { url: "sqlite::memory:".to_string(), max_connections: 1 };
        let file = DatabaseConfig { url: "sqlite://data/auth.db".to_string(), max_connections: 5 };

        assert!(memory.is_in_memory());
        assert!(!file.is_in_memory());
    }

    #[test]
    fn test_bcrypt_cost_range() {
        assert!(PasswordConfig::is_valid_cost(4));
        assert!(PasswordConfig::is_valid_cost(PasswordConfig::DEFAULT_COST));
        assert!(!PasswordConfig::is_valid_cost(3));
        assert!(!PasswordConfig::is_valid_cost(32));
    }

    #[test]
    fn test_bind_address() {
        let server = ServerConfig { host: "127.0.0.1".to_string(), port: 8000 };
        assert_eq!(server.bind_address(), "127.0.0.1:8000");
    }
}
