//! CSV dataset loader
//!
//! Resolves the header row into an explicit column schema before reading any
//! rows, so a file missing a required column fails before vectorization.
//! Empty cells are tolerated, unparseable rows are skipped with a warning.

use std::{fs::File, io::Read, path::Path};

use chrono::{Datelike, NaiveDate, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{
    error::DataSourceError,
    models::{Dataset, Movie},
};

const TITLE_COLUMNS: &[&str] = &["title", "original_title"];
const GENRE_COLUMNS: &[&str] = &["genres", "genre"];
const CAST_COLUMNS: &[&str] = &["cast"];
const DIRECTOR_COLUMNS: &[&str] = &["director"];
const KEYWORD_COLUMNS: &[&str] = &["keywords"];
const RELEASE_DATE_COLUMNS: &[&str] = &["release_date"];
const RELEASE_YEAR_COLUMNS: &[&str] = &["release_year", "year"];

const TWO_DIGIT_YEAR_FORMAT: &str = "%m/%d/%y";

// two-digit years are tried before four-digit ones so "12/10/09" lands in 2009
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", TWO_DIGIT_YEAR_FORMAT, "%m/%d/%Y"];

/// Column positions resolved from the header row
#[derive(Debug, Clone, PartialEq)]
struct Schema {
    title: usize,
    genres: usize,
    cast: usize,
    director: usize,
    keywords: Option<usize>,
    release_date: Option<usize>,
    release_year: Option<usize>,
}

impl Schema {
    fn resolve(headers: &StringRecord) -> Result<Self, DataSourceError> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

        let find = |aliases: &[&str]| -> Option<usize> {
            aliases
                .iter()
                .find_map(|alias| names.iter().position(|name| name == alias))
        };
        let require = |aliases: &[&str]| -> Result<usize, DataSourceError> {
            find(aliases).ok_or_else(|| DataSourceError::MissingColumn {
                column: aliases[0].to_string(),
            })
        };

        Ok(Self {
            title: require(TITLE_COLUMNS)?,
            genres: require(GENRE_COLUMNS)?,
            cast: require(CAST_COLUMNS)?,
            director: require(DIRECTOR_COLUMNS)?,
            keywords: find(KEYWORD_COLUMNS),
            release_date: find(RELEASE_DATE_COLUMNS),
            release_year: find(RELEASE_YEAR_COLUMNS),
        })
    }

    fn to_movie(&self, record: &StringRecord) -> Movie {
        let cell = |idx: usize| record.get(idx).unwrap_or("");
        let optional = |idx: Option<usize>| idx.map(cell).unwrap_or("");

        // an explicit year column wins over one derived from the date
        let release_year = parse_year(optional(self.release_year)).or_else(|| {
            parse_date(optional(self.release_date)).map(|date| date.year())
        });

        Movie {
            title: clean_text(cell(self.title)),
            genres: split_list(cell(self.genres)),
            cast: split_list(cell(self.cast)),
            director: clean_text(cell(self.director)),
            keywords: split_list(optional(self.keywords)),
            release_year,
        }
    }
}

/// Loads a dataset from a CSV file on disk
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, DataSourceError> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::error!(path = %path.display(), "Data source does not exist");
        return Err(DataSourceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        tracing::error!(path = %path.display(), "Data source is not a regular file");
        return Err(DataSourceError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    tracing::info!(path = %path.display(), "Loading movies");
    load_from_reader(file, &path.display().to_string())
}

/// Loads a dataset from any CSV byte stream
///
/// `origin` names the stream in log lines and errors.
pub fn load_from_reader<R: Read>(reader: R, origin: &str) -> Result<Dataset, DataSourceError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let schema = Schema::resolve(reader.headers()?).map_err(|e| {
        tracing::error!(origin = %origin, error = %e, "Missing expected column in data");
        e
    })?;

    let mut movies = Vec::new();
    let mut malformed = 0usize;

    for result in reader.records() {
        match result {
            Ok(record) => movies.push(schema.to_movie(&record)),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                malformed += 1;
                let line = e.position().map(|p| p.line());
                tracing::warn!(origin = %origin, line = ?line, error = %e, "Skipping malformed row");
            }
        }
    }

    let row_count = movies.len();
    let dataset = Dataset::new(movies);

    if dataset.is_empty() {
        return Err(DataSourceError::Empty {
            origin: origin.to_string(),
        });
    }

    tracing::info!(
        origin = %origin,
        loaded = dataset.len(),
        dropped = row_count - dataset.len(),
        malformed,
        "Successfully loaded movies"
    );

    Ok(dataset)
}

/// Collapses runs of whitespace and trims
fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a multi-valued cell on `|` or `,`
fn split_list(raw: &str) -> Vec<String> {
    raw.split(['|', ','])
        .map(clean_text)
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    // some exports write integer columns as floats ("2009.0")
    let year = raw.parse::<i32>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && value.fract() == 0.0)
            .map(|value| value as i32)
    });
    match year {
        Some(year) if year > 0 => Some(year),
        _ => {
            tracing::debug!(value = %raw, "Unparseable release year");
            None
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = DATE_FORMATS.iter().find_map(|format| {
        let date = NaiveDate::parse_from_str(raw, format).ok()?;
        if *format == TWO_DIGIT_YEAR_FORMAT {
            Some(pin_to_past(date, Utc::now().year()))
        } else {
            Some(date)
        }
    });
    if parsed.is_none() {
        tracing::debug!(value = %raw, "Unparseable release date");
    }
    parsed
}

/// Moves a two-digit-year date back a century when it lands after `current_year`
///
/// chrono pivots `%y` at 70, so "6/16/60" parses as 2060.
fn pin_to_past(date: NaiveDate, current_year: i32) -> NaiveDate {
    if date.year() <= current_year {
        return date;
    }
    date.with_year(date.year() - 100).unwrap_or(date)
}
