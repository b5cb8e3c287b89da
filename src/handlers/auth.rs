//! 세션 핸들러: 로그인, 액세스 토큰 재발급, 리프레시 토큰 폐기

use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    domain::dto::users::LoginRequest,
    errors::AppError,
    services::auth::{extract_bearer_token, SessionService},
};

/// 이메일/비밀번호 로그인
///
/// 성공하면 사용자 정보와 함께 액세스 토큰(1시간), 리프레시 토큰(60일)을 돌려줍니다.
/// 이메일이 없거나 비밀번호가 틀리면 같은 401 응답이 나갑니다.
#[post("/login")]
pub async fn login(
    session_service: web::Data<SessionService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = session_service.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// `Authorization: Bearer <refresh token>`으로 새 액세스 토큰을 발급합니다.
#[post("/refresh")]
pub async fn refresh(
    req: HttpRequest,
    session_service: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = extract_bearer_token(req.headers())?;

    let response = session_service.refresh(&refresh_token).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/revoke")]
pub async fn revoke(
    req: HttpRequest,
    session_service: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = extract_bearer_token(req.headers())?;

    session_service.revoke(&refresh_token).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::errors::{LOGIN_FAILED_MESSAGE, UNAUTHORIZED_MESSAGE};
    use crate::handlers::testing::{bearer, TestContext};

    #[actix_web::test]
    async fn test_register_login_refresh_revoke_over_http() {
        let ctx = TestContext::new();
        let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "email": "saul@bettercall.com", "password": "123456" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "saul@bettercall.com", "password": "123456" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let login: Value = test::read_body_json(resp).await;
        let access_token = login["token"].as_str().unwrap().to_string();
        let refresh_token = login["refresh_token"].as_str().unwrap().to_string();
        assert!(login.get("hashed_password").is_none());

        let req = test::TestRequest::post()
            .uri("/api/refresh")
            .insert_header(bearer(&refresh_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let refreshed: Value = test::read_body_json(resp).await;
        let new_token = refreshed["token"].as_str().unwrap();
        assert_ne!(new_token, access_token);
        assert!(ctx.tokens.validate_access_token(new_token).is_ok());

        let req = test::TestRequest::post()
            .uri("/api/revoke")
            .insert_header(bearer(&refresh_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::post()
            .uri("/api/refresh")
            .insert_header(bearer(&refresh_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_refresh_and_revoke_require_bearer_header() {
        let ctx = TestContext::new();
        let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;

        for uri in ["/api/refresh", "/api/revoke"] {
            let req = test::TestRequest::post().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{} without header", uri);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], UNAUTHORIZED_MESSAGE);

            let req = test::TestRequest::post()
                .uri(uri)
                .insert_header(("Authorization", "Basic x"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{} with Basic scheme", uri);
        }
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_is_unauthorized() {
        let ctx = TestContext::new();
        ctx.sign_up_and_login("walt@breakingbad.com", "correct").await;
        let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "walt@breakingbad.com", "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], LOGIN_FAILED_MESSAGE);
    }
}
