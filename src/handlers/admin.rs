//! 관리자 핸들러와 `/app` 정적 페이지, 헬스 체크

use actix_web::{get, post, web, HttpResponse, Responder};

use crate::{errors::AppError, services::admin::AdminService};

const APP_INDEX_PAGE: &str = "<html>\n  <body>\n    <h1>Welcome to Chirpy</h1>\n  </body>\n</html>";

/// `GET /api/healthz`
#[get("/healthz")]
pub async fn readiness() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK")
}

/// `/app` 스코프의 첫 페이지. 방문 카운터는 스코프 미들웨어가 올립니다.
#[get("")]
pub async fn app_index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(APP_INDEX_PAGE)
}

#[get("/metrics")]
pub async fn metrics(admin_service: web::Data<AdminService>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(admin_service.metrics_page())
}

/// 개발 환경에서만 허용됩니다. 모든 사용자(및 연쇄 삭제되는 데이터)와 카운터를 지웁니다.
#[post("/reset")]
pub async fn reset(admin_service: web::Data<AdminService>) -> Result<HttpResponse, AppError> {
    let deleted = admin_service.reset().await?;
    log::info!("관리자 리셋 완료 - 삭제된 사용자: {}명", deleted);

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hits reset to 0 and database reset to initial state."))
}
