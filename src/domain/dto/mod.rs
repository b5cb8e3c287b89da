//! # Data Transfer Objects Module
//!
//! API 경계에서 주고받는 JSON 구조를 정의합니다. 엔티티와 분리되어 있어
//! 비밀번호 해시 같은 내부 필드는 응답으로 나가지 않습니다.
//!
//! ```text
//! dto/
//! ├── users/      # 회원가입, 로그인, 자격 증명 변경
//! ├── tokens/     # 리프레시 흐름 응답
//! ├── chirps/     # 게시글 작성/조회
//! └── webhooks/   # 결제 제공자(Polka) 이벤트
//! ```
//!
//! 요청 DTO는 `validator::Validate`를 구현하며 핸들러에서 `payload.validate()?`로
//! 검증합니다. 검증 실패는 `AppError::ValidationError`(400)로 변환됩니다.

pub mod users;
pub mod tokens;
pub mod chirps;
pub mod webhooks;

pub use users::{CreateUserRequest, LoginRequest, LoginResponse, UpdateUserRequest, UserResponse};
pub use tokens::AccessTokenResponse;
pub use chirps::{ChirpListQuery, ChirpResponse, CreateChirpRequest, SortOrder};
pub use webhooks::{PolkaEvent, PolkaEventData, USER_UPGRADED_EVENT};
