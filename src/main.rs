use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use storefront_auth::config::{AppConfig, CorsConfig};
use storefront_auth::core::context::AppContext;
use storefront_auth::db::Database;
use storefront_auth::middlewares::AuthMiddleware;
use storefront_auth::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화 (.env의 RUST_LOG가 반영되도록 로드 먼저)
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => info!(".env 파일 로드 생략: {}", e),
    }

    info!("🚀 스토어프론트 인증 서비스 시작중...");

    // 필수 설정이 없으면 소켓을 열기 전에 종료
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ 설정 로드 실패: {}", e);
            std::process::exit(1);
        }
    };
    info!("환경: {:?}", config.environment);

    let database = match initialize_database(&config).await {
        Ok(database) => database,
        Err(e) => {
            error!("❌ 데이터베이스 초기화 실패: {}", e);
            std::process::exit(1);
        }
    };

    let ctx = match AppContext::build(config, database) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            std::process::exit(1);
        }
    };
    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(ctx).await
}

async fn start_http_server(ctx: AppContext) -> std::io::Result<()> {
    let bind_address = ctx.config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit = &ctx.config.rate_limit;
    let Some(governor_conf) = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
    else {
        error!("❌ Rate Limiting 설정이 올바르지 않습니다: {:?}", rate_limit);
        std::process::exit(1);
    };

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors(&ctx.config.cors);

        App::new()
            // Rate Limiting 미들웨어 (라우트에 가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            // 인증 게이트
            .wrap(AuthMiddleware::new(ctx.policies.clone(), ctx.tokens.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, &ctx))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// `PROFILE`에 맞는 .env 파일을 로드합니다.
///
/// * `prod` → `.env.prod`
/// * `dev` → `.env.dev`
/// * 그 외 → `.env`
fn load_env_file() -> dotenv::Result<&'static str> {
    match std::env::var("PROFILE").unwrap_or_default().as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=storefront_auth::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// SQLite 연결 후 마이그레이션을 적용합니다
async fn initialize_database(config: &AppConfig) -> storefront_auth::errors::AppResult<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&config.database).await?;
    database.migrate().await?;

    Ok(database)
}

/// CORS 설정을 구성합니다
///
/// `ALLOWED_ORIGINS`에 나열된 Origin만 허용합니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
