//! 게시글(Chirp) 서비스
//!
//! - 본문은 유니코드 스칼라 값 기준 140자 이하
//! - 금칙어(`kerfuffle`, `sharbert`, `fornax`)는 대소문자 구분 없이 `****`로 치환
//! - 삭제는 작성자 본인만 가능 (`AuthError::Forbidden` → 403)

use std::sync::Arc;

use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::{
    domain::dto::chirps::{ChirpListQuery, ChirpResponse},
    errors::{AppError, AppResult, AuthError, PersistenceError},
    repositories::chirps::{ChirpRepository, ChirpStore},
    utils::string_utils::censor_words,
};

/// 게시글 최대 길이
pub const MAX_CHIRP_LENGTH: usize = 140;

/// 치환 대상 단어 (소문자)
pub const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

pub struct ChirpService {
    chirps: Arc<dyn ChirpStore>,
}

static CHIRP_SERVICE_INSTANCE: OnceCell<Arc<ChirpService>> = OnceCell::new();

impl ChirpService {
    pub fn new(chirps: Arc<dyn ChirpStore>) -> Self {
        Self { chirps }
    }

    pub fn instance() -> Arc<Self> {
        CHIRP_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ChirpRepository::instance())))
            .clone()
    }

    pub async fn create_chirp(&self, user_id: Uuid, body: &str) -> AppResult<ChirpResponse> {
        if body.chars().count() > MAX_CHIRP_LENGTH {
            return Err(AppError::ValidationError("Chirp is too long".to_string()));
        }

        let cleaned = censor_words(body, &PROFANE_WORDS);
        // 토큰은 유효하지만 작성자가 이미 삭제된 경우 외래키 위반이 납니다.
        let chirp = self
            .chirps
            .create_chirp(&cleaned, user_id)
            .await
            .map_err(|e| match e {
                PersistenceError::Constraint(_) => AppError::NotFound("User not found".to_string()),
                other => other.into(),
            })?;

        log::debug!("게시글 생성 - ID: {}, 작성자: {}", chirp.id, user_id);
        Ok(ChirpResponse::from(chirp))
    }

    /// 게시글 목록. `author_id`가 UUID가 아니면 400입니다.
    pub async fn list_chirps(&self, query: ChirpListQuery) -> AppResult<Vec<ChirpResponse>> {
        let author_id = match query.author_id.as_deref() {
            Some(raw) => Some(
                Uuid::parse_str(raw)
                    .map_err(|_| AppError::ValidationError("Invalid author_id".to_string()))?,
            ),
            None => None,
        };

        let chirps = self.chirps.list_chirps(author_id, query.sort).await?;
        Ok(chirps.into_iter().map(ChirpResponse::from).collect())
    }

    /// 단건 조회. 잘못된 ID 형식도 404로 취급합니다.
    pub async fn get_chirp(&self, chirp_id: &str) -> AppResult<ChirpResponse> {
        let id = parse_chirp_id(chirp_id)?;

        self.chirps
            .find_chirp_by_id(id)
            .await?
            .map(ChirpResponse::from)
            .ok_or_else(chirp_not_found)
    }

    pub async fn delete_chirp(&self, user_id: Uuid, chirp_id: &str) -> AppResult<()> {
        let id = parse_chirp_id(chirp_id)?;

        let chirp = self
            .chirps
            .find_chirp_by_id(id)
            .await?
            .ok_or_else(chirp_not_found)?;

        if !chirp.is_owned_by(user_id) {
            log::info!("타인 게시글 삭제 시도 - 게시글: {}, 요청자: {}", id, user_id);
            return Err(AuthError::Forbidden.into());
        }

        if !self.chirps.delete_chirp(id).await? {
            return Err(chirp_not_found());
        }
        Ok(())
    }
}

fn parse_chirp_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| chirp_not_found())
}

fn chirp_not_found() -> AppError {
    AppError::NotFound("Chirp not found".to_string())
}

fn chirp_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(ChirpService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "chirp_service",
        constructor: chirp_service_constructor,
    }
}
