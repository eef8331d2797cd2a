mod activate_user;
mod change_password;
mod delete_account;
mod fetch_profile;
mod login_user;
mod logout_user;
mod register_user;
mod update_profile;

pub use activate_user::*;
pub use change_password::*;
pub use delete_account::*;
pub use fetch_profile::*;
pub use login_user::*;
pub use logout_user::*;
pub use register_user::*;
pub use update_profile::*;
