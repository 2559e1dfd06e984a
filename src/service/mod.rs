pub mod auth;
pub mod constellation;
pub mod diary;
pub mod star;
pub mod tag;
pub mod user;
