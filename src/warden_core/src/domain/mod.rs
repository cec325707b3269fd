pub mod email;
pub mod password;
pub mod reset_token;
pub mod user;
pub mod user_id;
