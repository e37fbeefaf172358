//! Week counting and cell addressing.

use chrono::NaiveDate;

/// Weeks in one row of the calendar
pub const WEEKS_PER_YEAR: u16 = 52;
/// Rows in the calendar
pub const MAX_YEARS: u16 = 90;
/// Cells in the calendar (4680)
pub const TOTAL_WEEKS: u16 = WEEKS_PER_YEAR * MAX_YEARS;

/// Whole weeks elapsed between `birthdate` and `reference`.
///
/// Counts whole calendar days, then floor-divides by seven, so a partial
/// week never counts. The result is not clamped to the calendar size. A
/// reference date before the birthdate yields zero; rejecting that case is
/// the request layer's job.
pub fn weeks_lived(birthdate: NaiveDate, reference: NaiveDate) -> u32 {
    let days = reference.signed_duration_since(birthdate).num_days();
    u32::try_from(days.div_euclid(7)).unwrap_or(0)
}

/// Address of one cell, counted row-major: `row * columns + column`.
/// On the life grid that is `year * 52 + week`, always below [`TOTAL_WEEKS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekIndex(u32);

impl WeekIndex {
    pub fn new(row: u16, column: u16, columns: u16) -> Self {
        WeekIndex(u32::from(row) * u32::from(columns) + u32::from(column))
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    /// A cell is lived iff its index is below the number of weeks lived.
    pub fn is_lived(self, weeks_lived: u32) -> bool {
        self.0 < weeks_lived
    }
}

/// How much of a 90-year life has been lived
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifeSummary {
    pub weeks_lived: u32,
    pub total_weeks: u32,
    /// Percentage of the calendar lived, not capped at 100
    pub percentage: f64,
}

impl LifeSummary {
    pub fn new(weeks_lived: u32) -> Self {
        let total_weeks = u32::from(TOTAL_WEEKS);
        LifeSummary {
            weeks_lived,
            total_weeks,
            percentage: f64::from(weeks_lived) / f64::from(total_weeks) * 100.0,
        }
    }
}
