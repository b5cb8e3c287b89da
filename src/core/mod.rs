//! # Core Framework Module
//!
//! 의존성 주입 컨테이너를 제공합니다.
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 인프라 컴포넌트(`Database`, `AppConfig`)를 타입별로 보관
//! - **자동 레지스트리**: `inventory` 기반 리포지토리/서비스 등록
//! - **싱글톤 관리**: 각 컴포넌트의 `OnceCell` 인스턴스를 시작 시 일괄 생성
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//!
//! ServiceLocator::set(Arc::new(config));
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::initialize_all();
//!
//! let session_service = SessionService::instance();
//! ```

pub mod registry;

pub use registry::*;
