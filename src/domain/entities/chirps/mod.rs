//! 게시글(chirp) 엔티티 모듈

pub mod chirp;

pub use chirp::*;
