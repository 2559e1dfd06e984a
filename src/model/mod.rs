pub mod api;
pub mod app;
pub mod diary;
pub mod session;
pub mod star;
pub mod tag;
pub mod user;
