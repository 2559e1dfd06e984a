//! Zodiac sign date math and constellation polyline sampling.

mod sampling;
mod season;

pub use sampling::{expand_to_days, sample_polyline, Point};
pub use season::{season_range, SeasonRange};

use chrono::{Datelike, NaiveDate};

/// Calendar definition of a zodiac sign. Boundaries are inclusive on both
/// ends and expressed as zero-padded `MM-DD` strings alongside their numeric
/// parts.
pub struct ZodiacDef {
    pub name_ko: &'static str,
    pub start_mmdd: &'static str,
    pub end_mmdd: &'static str,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl ZodiacSign {
    /// All signs in lookup order; Capricorn first because it is also the
    /// fallback when no range matches.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
        }
    }

    pub fn from_code(code: &str) -> Option<ZodiacSign> {
        ZodiacSign::ALL.into_iter().find(|sign| sign.code() == code)
    }

    pub fn def(self) -> &'static ZodiacDef {
        match self {
            ZodiacSign::Capricorn => &ZodiacDef {
                name_ko: "염소자리",
                start_mmdd: "12-22",
                end_mmdd: "01-19",
                start_month: 12,
                start_day: 22,
                end_month: 1,
                end_day: 19,
            },
            ZodiacSign::Aquarius => &ZodiacDef {
                name_ko: "물병자리",
                start_mmdd: "01-20",
                end_mmdd: "02-18",
                start_month: 1,
                start_day: 20,
                end_month: 2,
                end_day: 18,
            },
            ZodiacSign::Pisces => &ZodiacDef {
                name_ko: "물고기자리",
                start_mmdd: "02-19",
                end_mmdd: "03-20",
                start_month: 2,
                start_day: 19,
                end_month: 3,
                end_day: 20,
            },
            ZodiacSign::Aries => &ZodiacDef {
                name_ko: "양자리",
                start_mmdd: "03-21",
                end_mmdd: "04-19",
                start_month: 3,
                start_day: 21,
                end_month: 4,
                end_day: 19,
            },
            ZodiacSign::Taurus => &ZodiacDef {
                name_ko: "황소자리",
                start_mmdd: "04-20",
                end_mmdd: "05-20",
                start_month: 4,
                start_day: 20,
                end_month: 5,
                end_day: 20,
            },
            ZodiacSign::Gemini => &ZodiacDef {
                name_ko: "쌍둥이자리",
                start_mmdd: "05-21",
                end_mmdd: "06-21",
                start_month: 5,
                start_day: 21,
                end_month: 6,
                end_day: 21,
            },
            ZodiacSign::Cancer => &ZodiacDef {
                name_ko: "게자리",
                start_mmdd: "06-22",
                end_mmdd: "07-22",
                start_month: 6,
                start_day: 22,
                end_month: 7,
                end_day: 22,
            },
            ZodiacSign::Leo => &ZodiacDef {
                name_ko: "사자자리",
                start_mmdd: "07-23",
                end_mmdd: "08-22",
                start_month: 7,
                start_day: 23,
                end_month: 8,
                end_day: 22,
            },
            ZodiacSign::Virgo => &ZodiacDef {
                name_ko: "처녀자리",
                start_mmdd: "08-23",
                end_mmdd: "09-22",
                start_month: 8,
                start_day: 23,
                end_month: 9,
                end_day: 22,
            },
            ZodiacSign::Libra => &ZodiacDef {
                name_ko: "천칭자리",
                start_mmdd: "09-23",
                end_mmdd: "10-22",
                start_month: 9,
                start_day: 23,
                end_month: 10,
                end_day: 22,
            },
            ZodiacSign::Scorpio => &ZodiacDef {
                name_ko: "전갈자리",
                start_mmdd: "10-23",
                end_mmdd: "11-21",
                start_month: 10,
                start_day: 23,
                end_month: 11,
                end_day: 21,
            },
            ZodiacSign::Sagittarius => &ZodiacDef {
                name_ko: "사수자리",
                start_mmdd: "11-22",
                end_mmdd: "12-21",
                start_month: 11,
                start_day: 22,
                end_month: 12,
                end_day: 21,
            },
        }
    }

    pub fn name_ko(self) -> &'static str {
        self.def().name_ko
    }
}

/// Inclusive `MM-DD` range check, wrapping across the year boundary when
/// `start > end` lexically (e.g. Capricorn's `12-22` to `01-19`).
pub fn in_range(mmdd: &str, start: &str, end: &str) -> bool {
    if start <= end {
        mmdd >= start && mmdd <= end
    } else {
        mmdd >= start || mmdd <= end
    }
}

/// Zodiac sign for a calendar date, ignoring the year. Falls back to
/// Capricorn when no range matches.
pub fn sign_for_date(date: NaiveDate) -> ZodiacSign {
    let mmdd = format!("{:02}-{:02}", date.month(), date.day());

    ZodiacSign::ALL
        .into_iter()
        .find(|sign| {
            let def = sign.def();
            in_range(&mmdd, def.start_mmdd, def.end_mmdd)
        })
        .unwrap_or(ZodiacSign::Capricorn)
}
