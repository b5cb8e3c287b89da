//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 금칙어 치환, 선택 문자열 정리
//! - [`display_terminal`] - 시작 시 터미널 출력 포맷팅

pub mod string_utils;
pub mod display_terminal;
