pub mod admin_service;

pub use admin_service::*;
