pub mod polka_event;

pub use polka_event::*;
