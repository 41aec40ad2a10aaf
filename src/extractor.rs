mod bato;
pub use bato::BatoExtractor;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;

/// Caller-supplied values carried through to chapters and pages untouched.
pub type Context = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub url: String,
    pub cover_url: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ongoing,
    Completed,
    Hiatus,
    Cancelled,
    #[default]
    Unknown,
}

impl Status {
    /// Maps the site's status text. Anything unrecognized, "pending"
    /// included, is `Unknown`.
    pub fn from_label(label: &str) -> Status {
        match label {
            "ongoing" => Status::Ongoing,
            "completed" => Status::Completed,
            "hiatus" => Status::Hiatus,
            "cancelled" => Status::Cancelled,
            _ => Status::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesDetails {
    pub url: String,
    pub name: String,
    pub description: String,
    pub poster_url: String,
    pub genres: Vec<String>,
    pub authors: Vec<String>,
    pub original_language: String,
    pub year: i32,
    pub status: Status,
    /// Always `status == Status::Completed`.
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chapter {
    pub id: String,
    pub volume_number: f64,
    pub chapter_number: String,
    pub name: String,
    pub url: String,
    pub source_url: String,
    pub localization: String,
    pub release_date: DateTime<Utc>,
    /// The context's `description`, when it is a non-empty string. Values of
    /// any other JSON type are not copied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub context: Context,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageImage {
    pub url: String,
    pub context: Context,
}

/// The parsing half of each operation: markup in, records out.
///
/// Search and series extraction degrade to empty values. Chapter and page
/// extraction fail when the page doesn't have the expected structure, since
/// nothing useful can be salvaged from it.
pub trait Extractor {
    /// Candidates in document order. Names are left empty; the caller fills
    /// them from each candidate's detail page.
    fn extract_search(&self, html: &str) -> Vec<SearchResult>;
    fn extract_series(&self, html: &str, url: &str) -> SeriesDetails;
    fn extract_chapters(&self, html: &str, context: &Context) -> Result<Vec<Chapter>>;
    fn extract_pages(&self, html: &str, context: &Context) -> Result<Vec<PageImage>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table() {
        let cases = [
            ("ongoing", Status::Ongoing),
            ("completed", Status::Completed),
            ("hiatus", Status::Hiatus),
            ("cancelled", Status::Cancelled),
            ("pending", Status::Unknown),
            ("", Status::Unknown),
            ("Completed", Status::Unknown),
            ("finished", Status::Unknown),
            ("canceled", Status::Unknown),
        ];
        for (label, expected) in cases {
            assert_eq!(Status::from_label(label), expected, "label {:?}", label);
        }
    }

    #[test]
    fn default_series_is_empty() {
        let series = SeriesDetails::default();
        assert!(series.name.is_empty() && series.genres.is_empty());
        assert_eq!(series.year, 0);
        assert_eq!(series.status, Status::Unknown);
        assert!(!series.complete);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Hiatus).unwrap(), "\"hiatus\"");
    }
}
