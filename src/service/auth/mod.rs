pub mod callback;
pub mod login;
