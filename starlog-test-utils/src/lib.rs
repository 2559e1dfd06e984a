pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::{OAuthClient, TestAppState, TestSetup};

use chrono::NaiveDate;

/// Civil date literal for fixtures; panics on invalid input (test code only).
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date literal")
}

pub mod prelude {
    pub use crate::{
        test_setup_with_tables, ymd, TestBuilder, TestError, TestSetup,
    };
}
