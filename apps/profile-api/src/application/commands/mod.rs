pub mod close_session;
pub mod register_user;
pub mod update_profile;

pub use close_session::handle_close_session;
pub use register_user::handle_register_user;
pub use update_profile::{handle_update_profile, handle_update_user_profile};
