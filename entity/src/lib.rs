pub mod diary;
pub mod diary_tag;
pub mod star_template;
pub mod tag;
pub mod user;

pub mod prelude {
    pub use super::diary::Entity as Diary;
    pub use super::diary_tag::Entity as DiaryTag;
    pub use super::star_template::Entity as StarTemplate;
    pub use super::tag::Entity as Tag;
    pub use super::user::Entity as StarlogUser;
}
