//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! HTTP 계층으로 나가는 [`AppError`]와, 인증 코어가 사용하는 도메인 에러
//! ([`CredentialError`], [`AuthError`], [`PersistenceError`])를 정의합니다.
//! 인증 코어는 상태 코드를 알지 못하며, `From` 변환을 통해서만 HTTP 응답으로 매핑됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | 도메인 에러 | AppError | HTTP Status |
//! |-------------|----------|-------------|
//! | `AuthError::Unauthorized` | `AuthenticationError` | 401 |
//! | `AuthError::Forbidden` | `AuthorizationError` | 403 |
//! | `AuthError::Internal` | `InternalError` | 500 |
//! | `CredentialError` | `ValidationError` | 400 |
//! | `PersistenceError::Constraint` | `ConflictError` | 409 |
//! | `PersistenceError::Unavailable` | `DatabaseError` | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn delete_chirp(user: AuthenticatedUser, id: Uuid) -> Result<HttpResponse, AppError> {
//!     chirp_service.delete_chirp(user.user_id, id).await?;
//!     Ok(HttpResponse::NoContent().finish())
//! }
//! ```

use thiserror::Error;

/// 클라이언트에게 노출되는 인증 실패 메시지
///
/// 토큰 추출, 서명 검증, 만료, 폐기 등 세부 원인은 구분하지 않습니다.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// 로그인 실패 시 메시지 (이메일 없음과 비밀번호 불일치를 구분하지 않음)
pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect email or password";

/// 애플리케이션 전역 에러 타입
///
/// 핸들러가 반환하는 에러이며 `actix_web::ResponseError`를 통해 자동으로
/// `{"error": "..."}` 형태의 JSON 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("{0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문에 실을 메시지
    ///
    /// 500 계열은 저장소 내부 정보가 새지 않도록 일반 메시지로 대체합니다.
    fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Something went wrong".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("요청 처리 중 서버 오류: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 비밀번호 해싱/검증 실패
///
/// 원문 비밀번호는 어떤 variant에도 담기지 않습니다.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// bcrypt가 입력을 처리할 수 없음 (72바이트 초과, NUL 포함, 손상된 해시 등)
    #[error("unable to process credential: {0}")]
    Unprocessable(String),

    /// 비밀번호가 해시와 일치하지 않음
    #[error("credential mismatch")]
    Mismatch,
}

/// 인증 코어 에러
///
/// 하위 원인은 로그로만 남기고 클라이언트에게는 구분하지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("internal auth error: {0}")]
    Internal(String),
}

/// 영속성 협력자 에러
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// 유니크/외래키 등 제약 조건 위반
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// 저장소 연결 실패 또는 기타 쿼리 오류
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for PersistenceError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation() || db_err.is_foreign_key_violation() =>
            {
                PersistenceError::Constraint(db_err.message().to_string())
            }
            _ => PersistenceError::Unavailable(e.to_string()),
        }
    }
}

impl From<PersistenceError> for AuthError {
    fn from(e: PersistenceError) -> Self {
        AuthError::Internal(e.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized => AppError::AuthenticationError(UNAUTHORIZED_MESSAGE.to_string()),
            AuthError::Forbidden => AppError::AuthorizationError("Forbidden".to_string()),
            AuthError::Internal(msg) => AppError::InternalError(msg),
        }
    }
}

impl From<CredentialError> for AppError {
    fn from(e: CredentialError) -> Self {
        log::warn!("자격 증명 처리 실패: {}", e);
        AppError::ValidationError("Unable to process credential".to_string())
    }
}

impl From<PersistenceError> for AppError {
    fn from(e: PersistenceError) -> Self {
        match e {
            PersistenceError::Constraint(_) => {
                AppError::ConflictError("Resource already exists".to_string())
            }
            PersistenceError::Unavailable(msg) => AppError::DatabaseError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_auth_error_status_mapping() {
        let unauthorized: AppError = AuthError::Unauthorized.into();
        let forbidden: AppError = AuthError::Forbidden.into();
        let internal: AppError = AuthError::Internal("entropy".to_string()).into();

        assert_eq!(unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_credential_error_is_bad_request() {
        let error: AppError = CredentialError::Unprocessable("too long".to_string()).into();

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), "Unable to process credential");
    }

    #[test]
    fn test_persistence_error_mapping() {
        let conflict: AppError = PersistenceError::Constraint("users_email_key".to_string()).into();
        let unavailable: AppError = PersistenceError::Unavailable("pool timed out".to_string()).into();

        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(unavailable.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_server_errors_hide_details() {
        let error = AppError::DatabaseError("relation \"users\" does not exist".to_string());

        assert_eq!(error.public_message(), "Something went wrong");
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_login_failure_message() {
        let error = AppError::AuthenticationError(LOGIN_FAILED_MESSAGE.to_string());

        assert_eq!(error.public_message(), "Incorrect email or password");
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }
}
