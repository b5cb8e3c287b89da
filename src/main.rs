//! Chirpy 백엔드 메인 애플리케이션
//!
//! 설정을 읽고 PostgreSQL 연결과 마이그레이션을 마친 뒤,
//! 모든 싱글톤 서비스를 초기화하고 HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use chirpy_backend::config::AppConfig;
use chirpy_backend::core::registry::ServiceLocator;
use chirpy_backend::db::Database;
use chirpy_backend::routes::{configure_all_routes, ROUTE_TABLE};
use chirpy_backend::utils::display_terminal::print_server_banner;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 Chirpy 서버 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let config = Arc::new(config);

    let database = initialize_database(&config).await?;

    ServiceLocator::set(config.clone());
    ServiceLocator::set(database);

    ServiceLocator::initialize_all();

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(&config).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 순서대로 적용합니다.
async fn start_http_server(config: &AppConfig) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    print_server_banner(&bind_address, &format!("{:?}", config.environment), ROUTE_TABLE);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "RATE_LIMIT_PER_SECOND and RATE_LIMIT_BURST_SIZE must be greater than 0",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev
/// * `PROFILE=prod` - .env.prod
/// * 그 외 또는 미설정 - .env
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// `RUST_LOG`가 없으면 `info,actix_web=debug`로 초기화합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// PostgreSQL 연결 후 내장 마이그레이션을 적용합니다.
async fn initialize_database(config: &AppConfig) -> std::io::Result<Arc<Database>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new(&config.database).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    database.migrate().await.map_err(|e| {
        error!("마이그레이션 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ PostgreSQL 연결 및 마이그레이션 완료");
    Ok(Arc::new(database))
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
