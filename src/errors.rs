//! Error types with diagnostics using miette
//!
//! Request errors are raised by the caller-side validation layer before the
//! core runs. Render errors come out of layout or artifact encoding.

use chrono::NaiveDate;
use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Request Errors
// ============================================================================

/// Errors in the caller-supplied birthdate
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid birthdate: {input:?}")]
    #[diagnostic(
        code(life_calendar::request::invalid_birthdate),
        help("use the YYYY-MM-DD format, e.g. 1990-05-15")
    )]
    InvalidBirthdate { input: String },

    #[error("birthdate {birthdate} is after {reference}")]
    #[diagnostic(
        code(life_calendar::request::birthdate_in_future),
        help("the birthdate cannot be in the future")
    )]
    BirthdateInFuture {
        birthdate: NaiveDate,
        reference: NaiveDate,
    },

    #[error("birthdate {birthdate} is before {min_year}")]
    #[diagnostic(
        code(life_calendar::request::birthdate_too_early),
        help("enter a birthdate from {min_year} onward")
    )]
    BirthdateTooEarly { birthdate: NaiveDate, min_year: i32 },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur during layout or rendering
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("degenerate grid geometry: usable area is {width} x {height}")]
    #[diagnostic(
        code(life_calendar::render::degenerate_geometry),
        help("margins and label gutters must leave a positive area on the surface")
    )]
    DegenerateGeometry { width: f64, height: f64 },

    #[error("invalid grid: {reason}")]
    #[diagnostic(code(life_calendar::render::invalid_grid))]
    InvalidGrid { reason: &'static str },

    #[error("could not allocate a {width} x {height} pixmap")]
    #[diagnostic(code(life_calendar::render::surface_allocation))]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("failed to encode {format}: {message}")]
    #[diagnostic(code(life_calendar::render::encoding))]
    Encoding {
        format: &'static str,
        message: String,
    },
}

impl RenderError {
    pub(crate) fn encoding(format: &'static str, err: impl std::fmt::Display) -> Self {
        RenderError::Encoding {
            format,
            message: err.to_string(),
        }
    }
}
