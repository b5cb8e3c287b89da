//! 인증 관련 모델

pub mod authenticated_user;

pub use authenticated_user::*;
