mod delete_account;
mod fetch_user;
mod login_user;
mod register_user;

pub use delete_account::*;
pub use fetch_user::*;
pub use login_user::*;
pub use register_user::*;
