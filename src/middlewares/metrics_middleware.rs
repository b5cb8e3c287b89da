//! 방문 카운터 미들웨어
//!
//! `/app` 스코프에 씌워 요청마다 `AdminService`의 카운터를 1 증가시킵니다.
//! 응답 상태와 무관하게 요청이 도착한 시점에 셉니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error};
use futures_util::future::LocalBoxFuture;

use crate::services::admin::AdminService;

/// 카운터는 앱 데이터의 `web::Data<AdminService>`에 기록됩니다.
pub struct HitCounter;

impl HitCounter {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for HitCounter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = HitCounterService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HitCounterService {
            service: Rc::new(service),
        }))
    }
}

pub struct HitCounterService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for HitCounterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match req.app_data::<web::Data<AdminService>>() {
            Some(admin) => admin.record_hit(),
            None => log::warn!("AdminService가 앱 데이터에 없어 방문 수를 기록하지 못함"),
        }
        let service = self.service.clone();

        Box::pin(async move { service.call(req).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{test, App, HttpResponse};

    use crate::config::{Environment, PasswordConfig};
    use crate::repositories::memory::MemoryStore;
    use crate::services::{auth::PasswordService, users::UserService};

    #[actix_web::test]
    async fn test_counts_only_wrapped_scope() {
        let store = Arc::new(MemoryStore::new());
        let passwords = Arc::new(PasswordService::new(&PasswordConfig { bcrypt_cost: 4 }));
        let users = Arc::new(UserService::new(store, passwords));
        let admin = Arc::new(AdminService::new(Environment::Development, users));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(admin.clone()))
                .service(
                    web::scope("/app")
                        .wrap(HitCounter::new())
                        .route("", web::get().to(|| async { HttpResponse::Ok().finish() })),
                )
                .route("/api/healthz", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        for _ in 0..3 {
            test::call_service(&app, test::TestRequest::get().uri("/app").to_request()).await;
        }
        test::call_service(&app, test::TestRequest::get().uri("/api/healthz").to_request()).await;

        assert_eq!(admin.hits(), 3);
    }
}
