pub mod chirp_service;

pub use chirp_service::*;
