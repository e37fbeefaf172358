use std::io::{self, BufRead, Write};

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use miette::{Context, IntoDiagnostic, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use life_calendar::request::{MIN_BIRTH_YEAR, today};
use life_calendar::{
    LifeCalendarRequest, LifeSummary, OutputFormat, RequestError, parse_birthdate, render,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Pdf,
    Png,
    Both,
}

impl FormatArg {
    fn formats(self) -> &'static [OutputFormat] {
        match self {
            FormatArg::Pdf => &[OutputFormat::Pdf],
            FormatArg::Png => &[OutputFormat::Png],
            FormatArg::Both => &[OutputFormat::Pdf, OutputFormat::Png],
        }
    }
}

/// Generate a calendar of a 90-year life, one box per week.
#[derive(Debug, Parser)]
#[command(name = "life-calendar", version, about)]
struct Cli {
    /// Birthdate as YYYY-MM-DD; prompted for when omitted
    #[arg(short, long)]
    birthdate: Option<String>,

    /// Title printed above the grid
    #[arg(short, long, default_value = life_calendar::DEFAULT_TITLE)]
    title: String,

    #[arg(short, long, value_enum, default_value_t = FormatArg::Pdf)]
    format: FormatArg,

    /// Directory the files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: Utf8PathBuf,

    /// Count weeks up to this date instead of today
    #[arg(long)]
    reference_date: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "life_calendar=debug"
        } else {
            "life_calendar=info"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

/// Ask for a birthdate until a valid one is entered.
fn prompt_request(title: &str, reference: chrono::NaiveDate) -> Result<LifeCalendarRequest> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter your birthdate (YYYY-MM-DD): ");
        io::stdout().flush().into_diagnostic()?;

        let Some(line) = lines.next() else {
            miette::bail!("operation cancelled");
        };
        let line = line.into_diagnostic()?;

        match parse_birthdate(&line).and_then(|d| LifeCalendarRequest::new(d, title, reference)) {
            Ok(request) => return Ok(request),
            Err(RequestError::InvalidBirthdate { .. }) => {
                println!("Error: Invalid date format. Please use YYYY-MM-DD (e.g., 1990-05-15)")
            }
            Err(RequestError::BirthdateInFuture { .. }) => {
                println!("Error: Birthdate cannot be in the future. Please try again.")
            }
            Err(RequestError::BirthdateTooEarly { .. }) => {
                println!("Error: Please enter a birthdate after {MIN_BIRTH_YEAR}.")
            }
        }
    }
}

/// `4680` -> `4,680`
fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn banner() -> String {
    let rule = "=".repeat(50);
    format!("{rule}\nLife Calendar Generator\n{rule}\n")
}

fn print_summary(summary: &LifeSummary) {
    println!(
        "  You have lived {} weeks out of {} possible weeks.",
        thousands(summary.weeks_lived),
        thousands(summary.total_weeks)
    );
    println!("  That's {:.1}% of a 90-year life.", summary.percentage);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let reference = match &cli.reference_date {
        Some(s) => parse_birthdate(s).wrap_err("invalid --reference-date")?,
        None => today(),
    };

    println!("{}", banner());
    let request = match &cli.birthdate {
        Some(s) => LifeCalendarRequest::new(parse_birthdate(s)?, cli.title.as_str(), reference)?,
        None => prompt_request(&cli.title, reference)?,
    };

    std::fs::create_dir_all(&cli.output_dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("creating {}", cli.output_dir))?;

    println!("\nGenerating your life calendar...");
    for &format in cli.format.formats() {
        let artifact = render(&request, format)?;
        let path = cli.output_dir.join(&artifact.filename);
        std::fs::write(&path, &artifact.bytes)
            .into_diagnostic()
            .wrap_err_with(|| format!("writing {path}"))?;
        println!("✓ {format} saved as: {path}");
    }
    print_summary(&request.summary());
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(4680), "4,680");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn banner_frames_the_name() {
        let banner = banner();
        let rule = "=".repeat(50);
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines, vec![rule.as_str(), "Life Calendar Generator", rule.as_str()]);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "life-calendar",
            "--birthdate",
            "1990-05-15",
            "--format",
            "both",
            "-o",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.birthdate.as_deref(), Some("1990-05-15"));
        assert_eq!(cli.format.formats().len(), 2);
        assert_eq!(cli.output_dir, Utf8PathBuf::from("out"));
        assert_eq!(cli.title, life_calendar::DEFAULT_TITLE);
    }
}
