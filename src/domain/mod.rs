//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 타입들입니다. 서비스와 저장소가 공유하며,
//! 이 계층은 HTTP나 데이터베이스 연결을 알지 못합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 테이블 행과 1:1 대응 (User, Chirp, RefreshToken)
//! ├── DTOs          - API 요청/응답 계약
//! └── Models        - 영속되지 않는 값 (토큰 클레임, 인증된 사용자)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 변환 규칙
//!
//! 엔티티는 `From` 구현으로만 응답 DTO가 됩니다. `User -> UserResponse` 변환은
//! 비밀번호 해시를 버리므로, 핸들러가 엔티티를 직접 직렬화하는 일은 없습니다.

pub mod entities;
pub mod dto;
pub mod models;
