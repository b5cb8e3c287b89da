//! 외부 시스템 웹훅 처리

pub mod polka_service;

pub use polka_service::*;
