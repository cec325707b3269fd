mod change_password;
mod helpers;
mod is_user_authenticated;
mod login;
mod logout;
mod password_reset;
mod refresh;
mod register;
mod user;
