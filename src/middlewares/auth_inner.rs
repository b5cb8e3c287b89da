use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::errors::{AppError, UNAUTHORIZED_MESSAGE};
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let Some(token_service) = req.app_data::<web::Data<TokenService>>().cloned() else {
                log::error!("TokenService가 앱 데이터에 등록되지 않음: {}", req.path());
                let response = AppError::InternalError("token service not configured".to_string())
                    .error_response();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            };

            match token_service.authenticate(req.headers()) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::debug!("인증 실패 ({} {}): {}", req.method(), req.path(), err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({ "error": UNAUTHORIZED_MESSAGE }));
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
