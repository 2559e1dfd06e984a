mod auth;
mod home;
mod star;
mod tag;
