pub mod login;
pub mod session;

pub use login::Login;
pub use session::{provide_session, use_session, LogoutButton, SessionUser};
