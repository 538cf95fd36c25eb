//! 퀴즈 콘텐츠 서비스 메인 애플리케이션
//!
//! 환경 설정과 로깅을 초기화하고, 설정된 저장소(MongoDB 또는 메모리)로
//! 도메인 서비스를 만든 뒤 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use quiz_service_backend::config::{
    ClaimConfig, Environment, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
use quiz_service_backend::db::Database;
use quiz_service_backend::repositories::{MemoryQuizRepository, MongoQuizRepository, QuizRepository};
use quiz_service_backend::routes::configure_all_routes;
use quiz_service_backend::services::{QuizService, TokenService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 퀴즈 서비스 시작중... (환경: {:?})", Environment::current());

    let repository = initialize_repository().await?;
    let timeout = StorageConfig::timeout();
    let quiz_service = web::Data::new(QuizService::new(repository, timeout));

    info!("✅ 도메인 서비스 초기화 완료 (저장소 타임아웃 {:?})", timeout);

    start_http_server(quiz_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 요청 제한, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(quiz_service: web::Data<QuizService>) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/quiz", bind_address);

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid rate limit configuration"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let token_service = TokenService::from_env();
    let claims = ClaimConfig::from_env();
    info!("클레임 설정: client={} user={}", claims.client_scope, claims.user_scope);

    HttpServer::new(move || {
        let cors = configure_cors();
        let token_service = token_service.clone();
        let claims = claims.clone();

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(quiz_service.clone())
            .configure(|cfg| configure_all_routes(cfg, token_service, claims))
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

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
            info!("기본 .env 파일 로드");
        }
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `STORAGE_BACKEND`에 맞는 저장소를 만듭니다
///
/// MongoDB를 쓰는 경우 연결을 확인하고 인덱스를 생성합니다.
async fn initialize_repository() -> io::Result<Arc<dyn QuizRepository>> {
    match StorageConfig::backend() {
        StorageBackend::Memory => {
            if Environment::current() == Environment::Production {
                warn!("⚠️ 운영 환경에서 메모리 저장소를 사용합니다");
            }
            warn!("📦 메모리 저장소 사용: 재시작 시 데이터가 사라집니다");

            let repository = MemoryQuizRepository::new();
            match StorageConfig::memory_account() {
                Some(account) => {
                    repository.seed_account(&account).map_err(|e| {
                        error!("계정 시드 실패: {}", e);
                        io::Error::other(e.to_string())
                    })?;
                    info!(
                        "계정 {} 시드 완료 (최소 태그 {}, 검수 {})",
                        account.id, account.config.minimum_tag_count, account.config.requires_audit
                    );
                }
                None => warn!("MEMORY_ACCOUNT_ID 미설정: 계정이 없어 문항 삽입은 404를 반환합니다"),
            }

            Ok(Arc::new(repository))
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            let repository = MongoQuizRepository::new(&database);
            repository.create_indexes().await.map_err(|e| {
                error!("인덱스 생성 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            info!("✅ MongoDB 인덱스 준비 완료");
            Ok(Arc::new(repository))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 로컬 개발 서버 Origin과 호출자 토큰 헤더를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8000")
        .allowed_origin("http://127.0.0.1:8000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("client-token"),
        ])
        .max_age(3600)
}
