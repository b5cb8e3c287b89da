//! API 라우트 설정 모듈
//!
//! 세 개의 스코프로 나뉩니다.
//!
//! - `/api`: 공개 및 인증 필요 REST 엔드포인트
//! - `/admin`: 방문 지표와 개발 환경 초기화
//! - `/app`: 방문 카운터가 씌워진 정적 첫 페이지
//!
//! 인증이 필요한 엔드포인트는 핸들러 속성의 `wrap = "AuthMiddleware::required()"`로
//! 개별 지정합니다. 같은 경로라도 메서드마다 공개 여부가 다르기 때문입니다
//! (`GET /api/chirps`는 공개, `POST /api/chirps`는 인증 필요).
//!
//! 핸들러와 미들웨어는 서비스를 `web::Data<...>`로 받습니다.
//! [`configure_all_routes`]가 싱글톤 인스턴스를 앱 데이터로 등록한 뒤
//! [`configure_routes`]로 엔드포인트를 붙입니다.
//!
//! ```rust,ignore
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::HitCounter;
use crate::services::{
    admin::AdminService,
    auth::{SessionService, TokenService},
    chirps::ChirpService,
    users::UserService,
    webhooks::PolkaWebhookService,
};

/// 시작 배너에 출력할 엔드포인트 목록 (메서드, 경로)
pub const ROUTE_TABLE: &[(&str, &str)] = &[
    ("GET", "/api/healthz"),
    ("POST", "/api/users"),
    ("PUT", "/api/users"),
    ("POST", "/api/login"),
    ("POST", "/api/refresh"),
    ("POST", "/api/revoke"),
    ("POST", "/api/chirps"),
    ("GET", "/api/chirps"),
    ("GET", "/api/chirps/{chirp_id}"),
    ("DELETE", "/api/chirps/{chirp_id}"),
    ("POST", "/api/polka/webhooks"),
    ("GET", "/admin/metrics"),
    ("POST", "/admin/reset"),
    ("GET", "/app"),
];

/// 서비스 싱글톤을 앱 데이터로 등록하고 모든 라우트를 설정합니다
///
/// `ServiceLocator::initialize_all()` 이후에 호출되어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::from(TokenService::instance()))
        .app_data(web::Data::from(SessionService::instance()))
        .app_data(web::Data::from(UserService::instance()))
        .app_data(web::Data::from(ChirpService::instance()))
        .app_data(web::Data::from(PolkaWebhookService::instance()))
        .app_data(web::Data::from(AdminService::instance()));

    configure_routes(cfg);
}

/// 엔드포인트만 설정합니다. 서비스 앱 데이터는 호출자가 등록합니다.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    configure_api_routes(cfg);
    configure_admin_routes(cfg);
    configure_app_routes(cfg);
}

fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::admin::readiness)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh)
            .service(handlers::auth::revoke)
            .service(handlers::chirps::create_chirp)
            .service(handlers::chirps::list_chirps)
            .service(handlers::chirps::get_chirp)
            .service(handlers::chirps::delete_chirp)
            .service(handlers::webhooks::polka_webhook),
    );
}

fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(handlers::admin::metrics)
            .service(handlers::admin::reset),
    );
}

fn configure_app_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/app")
            .wrap(HitCounter::new())
            .service(handlers::admin::app_index),
    );
}

/// 잘못된 JSON 본문을 다른 오류와 같은 `{"error": "..."}` 형태의 400으로 바꿉니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::ValidationError(format!("Invalid JSON body: {}", err)).into()
    })
}

/// 잘못된 쿼리 문자열(`sort=sideways` 등)을 400으로 바꿉니다.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(format!("Invalid query string: {}", err)).into()
    })
}
