use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

/// One column of the menu grid, e.g. `11월 1일(월)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateToken {
    raw: String,
    pub month: u32,
    pub day: u32,
    pub weekday: Weekday,
}

impl DateToken {
    pub fn new(raw: impl Into<String>, month: u32, day: u32, weekday: Weekday) -> Self {
        Self {
            raw: raw.into(),
            month,
            day,
            weekday,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Resolves the token to a calendar date. Returns `None` when the date does
    /// not exist in `year` or falls on a different weekday than printed.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        let date = NaiveDate::from_ymd_opt(year, self.month, self.day)?;
        (date.weekday() == self.weekday).then_some(date)
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for DateToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

pub fn parse_korean_weekday(text: &str) -> Option<Weekday> {
    let weekday = match text {
        "월" => Weekday::Mon,
        "화" => Weekday::Tue,
        "수" => Weekday::Wed,
        "목" => Weekday::Thu,
        "금" => Weekday::Fri,
        "토" => Weekday::Sat,
        "일" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// A row block of the document. Lunch is split into its three corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Breakfast,
    LunchCornerA,
    LunchCornerB,
    LunchSelfCorner,
    Dinner,
}

impl Section {
    /// Document order.
    pub const ALL: [Section; 5] = [
        Section::Breakfast,
        Section::LunchCornerA,
        Section::LunchCornerB,
        Section::LunchSelfCorner,
        Section::Dinner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Breakfast => "조식",
            Section::LunchCornerA => "중식 A코너",
            Section::LunchCornerB => "중식 B코너",
            Section::LunchSelfCorner => "중식 셀프코너",
            Section::Dinner => "석식",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Breakfast => "breakfast",
            Section::LunchCornerA => "lunch-corner-a",
            Section::LunchCornerB => "lunch-corner-b",
            Section::LunchSelfCorner => "lunch-self-corner",
            Section::Dinner => "dinner",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LunchMenu {
    #[serde(rename = "A코너")]
    pub corner_a: Vec<String>,
    #[serde(rename = "B코너")]
    pub corner_b: Vec<String>,
    #[serde(rename = "셀프코너")]
    pub self_corner: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyMenu {
    pub date: DateToken,
    #[serde(rename = "조식")]
    pub breakfast: Vec<String>,
    #[serde(rename = "중식")]
    pub lunch: LunchMenu,
    #[serde(rename = "석식")]
    pub dinner: Vec<String>,
}

impl DailyMenu {
    pub fn new(date: DateToken) -> Self {
        Self {
            date,
            breakfast: Vec::new(),
            lunch: LunchMenu::default(),
            dinner: Vec::new(),
        }
    }

    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Breakfast => &self.breakfast,
            Section::LunchCornerA => &self.lunch.corner_a,
            Section::LunchCornerB => &self.lunch.corner_b,
            Section::LunchSelfCorner => &self.lunch.self_corner,
            Section::Dinner => &self.dinner,
        }
    }

    pub(crate) fn section_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Breakfast => &mut self.breakfast,
            Section::LunchCornerA => &mut self.lunch.corner_a,
            Section::LunchCornerB => &mut self.lunch.corner_b,
            Section::LunchSelfCorner => &mut self.lunch.self_corner,
            Section::Dinner => &mut self.dinner,
        }
    }
}

/// Days in header order. Built once by the reconstructor and read-only after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeeklyMenu {
    days: Vec<DailyMenu>,
}

impl WeeklyMenu {
    pub(crate) fn from_days(days: Vec<DailyMenu>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DailyMenu] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyMenu> {
        self.days.iter()
    }
}

impl<'a> IntoIterator for &'a WeeklyMenu {
    type Item = &'a DailyMenu;
    type IntoIter = std::slice::Iter<'a, DailyMenu>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
