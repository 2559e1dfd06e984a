//! Database fixture factories.
//!
//! Fixtures insert rows through entity ActiveModels directly, bypassing the
//! application's repositories, so repository tests never depend on the code
//! under test.

pub mod diary;
pub mod star;
pub mod tag;
pub mod user;

use crate::setup::TestSetup;

impl TestSetup {
    pub fn user(&self) -> user::UserFixture<'_> {
        user::UserFixture {
            db: &self.state.db,
        }
    }

    pub fn diary(&self) -> diary::DiaryFixture<'_> {
        diary::DiaryFixture {
            db: &self.state.db,
        }
    }

    pub fn tag(&self) -> tag::TagFixture<'_> {
        tag::TagFixture {
            db: &self.state.db,
        }
    }

    pub fn star(&self) -> star::StarFixture<'_> {
        star::StarFixture {
            db: &self.state.db,
        }
    }
}
