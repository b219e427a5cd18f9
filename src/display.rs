use std::fmt;

use crate::model::{DailyMenu, Section, WeeklyMenu};

impl fmt::Display for DailyMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.date)?;
        write_sections(f, self)
    }
}

fn write_sections(f: &mut fmt::Formatter<'_>, day: &DailyMenu) -> fmt::Result {
    for section in Section::ALL {
        let cells = day.section(section);
        if cells.is_empty() {
            writeln!(f, "  {}: -", section.label())?;
        } else {
            writeln!(f, "  {}: {}", section.label(), cells.join(", "))?;
        }
    }
    Ok(())
}

impl fmt::Display for WeeklyMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, day) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

/// Renders the menu with each heading followed by the resolved ISO date, when
/// the printed date exists in `year`.
pub struct WithYear<'a> {
    pub menu: &'a WeeklyMenu,
    pub year: i32,
}

impl fmt::Display for WithYear<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, day) in self.menu.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            match day.date.date_in(self.year) {
                Some(date) => writeln!(f, "[{}] {}", day.date, date.format("%Y-%m-%d"))?,
                None => writeln!(f, "[{}] (not a date in {})", day.date, self.year)?,
            }
            write_sections(f, day)?;
        }
        Ok(())
    }
}

pub fn render_with_year(menu: &WeeklyMenu, year: i32) -> String {
    WithYear { menu, year }.to_string()
}
