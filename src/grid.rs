//! Rebuilds the day x section grid from filtered lines.
//!
//! Line 0 is the header and fixes the day columns. Every section then owns a
//! fixed range of line indices; each line in it is split into cells on runs of
//! two or more whitespace characters, and the Nth cell goes to the Nth day.
//! Days without a cell on a line simply get nothing appended. Cells past the
//! day count are dropped.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::StructureError;
use crate::model::{DailyMenu, DateToken, Section, WeeklyMenu, parse_korean_weekday};

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})월\s*(\d{1,2})일\s*\(([월화수목금토일])\)").expect("date token pattern")
});

static CELL_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("cell separator pattern"));

/// Line ranges (over the filtered lines) occupied by each section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub breakfast: Range<usize>,
    pub corner_a: Range<usize>,
    pub corner_b: Range<usize>,
    pub self_corner: Range<usize>,
    pub dinner: Range<usize>,
}

/// The weekly menu layout this service was written against: seven breakfast
/// rows (the last one is the self toast row), four rows each for corners A
/// and B, two self-corner rows and six dinner rows.
pub const WEEKLY_TEMPLATE: Template = Template {
    breakfast: 1..8,
    corner_a: 8..12,
    corner_b: 12..16,
    self_corner: 16..18,
    dinner: 18..24,
};

impl Default for Template {
    fn default() -> Self {
        WEEKLY_TEMPLATE
    }
}

impl Template {
    pub fn range(&self, section: Section) -> Range<usize> {
        match section {
            Section::Breakfast => self.breakfast.clone(),
            Section::LunchCornerA => self.corner_a.clone(),
            Section::LunchCornerB => self.corner_b.clone(),
            Section::LunchSelfCorner => self.self_corner.clone(),
            Section::Dinner => self.dinner.clone(),
        }
    }
}

pub fn parse_header(header: &str) -> Vec<DateToken> {
    DATE_TOKEN
        .captures_iter(header)
        .filter_map(|caps| {
            let raw = caps.get(0)?.as_str();
            let month = caps.get(1)?.as_str().parse::<u32>().ok()?;
            let day = caps.get(2)?.as_str().parse::<u32>().ok()?;
            let weekday = parse_korean_weekday(caps.get(3)?.as_str())?;
            Some(DateToken::new(raw, month, day, weekday))
        })
        .collect()
}

pub fn split_cells(line: &str) -> Vec<&str> {
    CELL_SEPARATOR
        .split(line.trim())
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

pub fn reconstruct<S: AsRef<str>>(
    lines: &[S],
    template: &Template,
) -> Result<WeeklyMenu, StructureError> {
    let header = match lines.first() {
        Some(line) => line.as_ref(),
        None => return Err(StructureError::NoDatesFound { header: None }),
    };
    let dates = parse_header(header);
    if dates.is_empty() {
        return Err(StructureError::NoDatesFound {
            header: Some(header.to_string()),
        });
    }
    debug!(days = dates.len(), header, "parsed header");

    let mut days: Vec<DailyMenu> = dates.into_iter().map(DailyMenu::new).collect();

    for section in Section::ALL {
        let range = template.range(section);
        let Some(section_lines) = lines.get(range.clone()) else {
            return Err(StructureError::RangeOutOfBounds {
                section,
                range,
                available: lines.len(),
            });
        };

        for line in section_lines {
            let cells = split_cells(line.as_ref());
            if cells.len() > days.len() {
                debug!(
                    %section,
                    cells = cells.len(),
                    days = days.len(),
                    "dropping cells past the last day"
                );
            }
            for (day, cell) in days.iter_mut().zip(cells) {
                day.section_mut(section).push(cell.to_string());
            }
        }
    }

    Ok(WeeklyMenu::from_days(days))
}
