pub mod activate_user;
pub mod change_password;
pub mod create_user;
pub mod delete_account;
pub mod fetch_profile;
pub mod login_user;
pub mod logout_user;
pub mod update_profile;
