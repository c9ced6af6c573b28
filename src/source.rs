//! Loading draw history from the published CSV, either over HTTP or from disk.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::draw::{Draw, History, PICK_COUNT};
use crate::error::{LotoError, LotoResult};

pub const DEFAULT_SOURCE_URL: &str = "https://loto6.thekyo.jp/data/loto6.csv";

const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// Where the draw history comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawSource {
    Url(String),
    File(PathBuf),
}

impl DrawSource {
    /// `http://` and `https://` locations are fetched, everything else is a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DrawSource::Url(location.to_string())
        } else {
            DrawSource::File(PathBuf::from(location))
        }
    }

    pub fn load(&self, layout: &CsvLayout) -> LotoResult<History> {
        let history = match self {
            DrawSource::Url(url) => {
                info!(%url, "fetching draw history");
                let body = fetch(url)?;
                parse_history(body.as_slice(), layout)?
            }
            DrawSource::File(path) => {
                info!(path = %path.display(), "reading draw history");
                let file = File::open(path).map_err(|source| LotoError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_history(file, layout)?
            }
        };

        match history.date_range() {
            Some((first, last)) => info!(draws = history.len(), %first, %last, "draw history loaded"),
            None => info!(draws = history.len(), "draw history loaded"),
        }
        Ok(history)
    }
}

fn fetch(url: &str) -> LotoResult<Vec<u8>> {
    let to_err = |source: reqwest::Error| LotoError::Fetch {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(to_err)?;
    let body = response.bytes().map_err(to_err)?;
    debug!(bytes = body.len(), "download complete");
    Ok(body.to_vec())
}

/// Column positions of the CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvLayout {
    pub has_headers: bool,
    pub date_column: Option<usize>,
    pub number_columns: [usize; PICK_COUNT],
}

impl Default for CsvLayout {
    /// `開催回, 日付, 第1数字 .. 第6数字, ...`
    fn default() -> Self {
        Self {
            has_headers: true,
            date_column: Some(1),
            number_columns: [2, 3, 4, 5, 6, 7],
        }
    }
}

/// Parses draw rows into a [`History`].
///
/// Rows are read as raw bytes: the published file is Shift-JIS, but only its
/// header carries non-ASCII text and the header is never decoded. Any row
/// that fails to parse or breaks the draw rules aborts the whole load.
pub fn parse_history<R: Read>(reader: R, layout: &CsvLayout) -> LotoResult<History> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(layout.has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut draws = Vec::new();
    for (index, record) in reader.byte_records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        let mut values = Vec::with_capacity(PICK_COUNT);
        for &column in &layout.number_columns {
            let Some(raw) = record.get(column) else {
                break;
            };
            let text = String::from_utf8_lossy(raw);
            let value = text
                .trim()
                .parse::<i64>()
                .map_err(|_| LotoError::UnparsableField {
                    line,
                    column,
                    value: text.trim().to_string(),
                })?;
            values.push(value);
        }

        let date = layout
            .date_column
            .and_then(|column| record.get(column))
            .and_then(|raw| {
                let text = String::from_utf8_lossy(raw);
                let parsed = parse_date(text.trim());
                if parsed.is_none() {
                    debug!(line, value = %text, "unparsable draw date");
                }
                parsed
            });

        let draw = Draw::new(&values, date)
            .map_err(|source| LotoError::MalformedRecord { line, source })?;
        draws.push(draw);
    }

    Ok(History::from_unordered(draws))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
