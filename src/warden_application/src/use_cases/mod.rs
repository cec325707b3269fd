pub mod change_password;
pub mod confirm_password_reset;
pub mod current_user;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod request_password_reset;
pub mod update_profile;
pub mod verify_token;
