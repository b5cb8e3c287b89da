//! 결제 제공자 웹훅 핸들러

use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    domain::dto::webhooks::PolkaEvent,
    errors::AppError,
    services::webhooks::PolkaWebhookService,
};

/// `POST /api/polka/webhooks`
///
/// API 키를 먼저 확인하므로 키가 틀리면 본문은 해석하지도 않습니다.
/// 처리했거나 무시한 이벤트는 모두 204로 응답합니다.
#[post("/polka/webhooks")]
pub async fn polka_webhook(
    req: HttpRequest,
    webhook_service: web::Data<PolkaWebhookService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    webhook_service.verify_api_key(req.headers())?;

    let event: PolkaEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::ValidationError(format!("Invalid webhook payload: {}", e)))?;

    webhook_service.handle_event(event).await?;

    Ok(HttpResponse::NoContent().finish())
}
