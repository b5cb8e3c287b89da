pub mod chirp_repo;

pub use chirp_repo::*;
