pub mod create_user_request;
pub mod login_request;
pub mod update_user_request;

pub use create_user_request::*;
pub use login_request::*;
pub use update_user_request::*;
