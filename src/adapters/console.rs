use crate::domain::model::BookRecord;
use crate::domain::ports::Presenter;
use crate::utils::error::{BookFinderError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};
use std::str::FromStr;

pub const SUPPORTED_FORMATS: &[&str] = &["text", "json", "csv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = BookFinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(BookFinderError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Supported values: {}", SUPPORTED_FORMATS.join(", ")),
            }),
        }
    }
}

/// JSON document printed for `--format json`. `books` is `null` when the
/// search produced no result set at all.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub query: &'a str,
    pub fetched_at: DateTime<Utc>,
    pub total: usize,
    pub books: Option<&'a [BookRecord]>,
}

pub struct ConsolePresenter<W: Write, E: Write> {
    out: W,
    err: E,
    format: OutputFormat,
    query: String,
}

impl ConsolePresenter<io::Stdout, io::Stderr> {
    pub fn stdio(format: OutputFormat, query: impl Into<String>) -> Self {
        Self::new(io::stdout(), io::stderr(), format, query)
    }
}

impl<W: Write, E: Write> ConsolePresenter<W, E> {
    pub fn new(out: W, err: E, format: OutputFormat, query: impl Into<String>) -> Self {
        Self {
            out,
            err,
            format,
            query: query.into(),
        }
    }

    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    fn write_report(&mut self, books: Option<&[BookRecord]>) -> Result<()> {
        let report = SearchReport {
            query: &self.query,
            fetched_at: Utc::now(),
            total: books.map_or(0, |b| b.len()),
            books,
        };
        let json = serde_json::to_string_pretty(&report)?;
        writeln!(self.out, "{}", json)?;
        Ok(())
    }

    fn write_csv(&mut self, books: &[BookRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_writer(&mut self.out);
        writer.write_record(["title", "author"])?;
        for book in books {
            writer.write_record([&book.title, &book.author])?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write, E: Write> Presenter for ConsolePresenter<W, E> {
    fn show_books(&mut self, books: &[BookRecord]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(
                    self.out,
                    "Found {} book(s) for \"{}\"",
                    books.len(),
                    self.query
                )?;
                for (index, book) in books.iter().enumerate() {
                    writeln!(self.out, "{:>3}. {}", index + 1, book.title)?;
                    writeln!(self.out, "     {}", book.author)?;
                }
            }
            OutputFormat::Json => self.write_report(Some(books))?,
            OutputFormat::Csv => self.write_csv(books)?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_no_results(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "No results found")?,
            OutputFormat::Json => self.write_report(None)?,
            OutputFormat::Csv => writeln!(self.err, "No results found")?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_network_unavailable(&mut self) -> Result<()> {
        writeln!(self.err, "No network connection available")?;
        Ok(())
    }

    fn show_empty_input(&mut self) -> Result<()> {
        writeln!(self.err, "Please enter a search term")?;
        Ok(())
    }
}
