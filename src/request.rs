//! Caller-side request validation.
//!
//! Everything a user types goes through here before the renderer sees it.

use chrono::{Datelike, Local, NaiveDate};

use crate::artifact::OutputFormat;
use crate::errors::RequestError;
use crate::weeks::{LifeSummary, weeks_lived};

pub const DEFAULT_TITLE: &str = "A 90-Year Human Life in Weeks";

/// Earliest accepted birth year
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_birthdate(input: &str) -> Result<NaiveDate, RequestError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        RequestError::InvalidBirthdate {
            input: input.to_string(),
        }
    })
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A validated calendar request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeCalendarRequest {
    birthdate: NaiveDate,
    title: String,
    reference_date: NaiveDate,
}

impl LifeCalendarRequest {
    /// Validate a request against `reference_date`.
    ///
    /// A blank title falls back to [`DEFAULT_TITLE`].
    pub fn new(
        birthdate: NaiveDate,
        title: impl Into<String>,
        reference_date: NaiveDate,
    ) -> Result<Self, RequestError> {
        if birthdate.year() < MIN_BIRTH_YEAR {
            return Err(RequestError::BirthdateTooEarly {
                birthdate,
                min_year: MIN_BIRTH_YEAR,
            });
        }
        if birthdate > reference_date {
            return Err(RequestError::BirthdateInFuture {
                birthdate,
                reference: reference_date,
            });
        }

        let title = title.into();
        let title = if title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        };

        Ok(LifeCalendarRequest {
            birthdate,
            title,
            reference_date,
        })
    }

    /// Validate a request against today's local date
    pub fn today(birthdate: NaiveDate, title: impl Into<String>) -> Result<Self, RequestError> {
        Self::new(birthdate, title, today())
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn weeks_lived(&self) -> u32 {
        weeks_lived(self.birthdate, self.reference_date)
    }

    pub fn summary(&self) -> LifeSummary {
        LifeSummary::new(self.weeks_lived())
    }

    /// `life_calendar_<birthdate>.<ext>`
    pub fn artifact_filename(&self, format: OutputFormat) -> String {
        format!(
            "life_calendar_{}.{}",
            self.birthdate.format("%Y-%m-%d"),
            format.extension()
        )
    }
}
