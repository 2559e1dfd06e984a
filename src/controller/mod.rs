pub mod auth;
pub mod diary;
pub mod home;
pub mod star;
pub mod tag;
pub mod util;
