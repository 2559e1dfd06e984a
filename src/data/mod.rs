pub mod diary;
pub mod star_template;
pub mod tag;
pub mod user;
