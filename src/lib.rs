//! Content extraction for bato.to: search results, series details, chapter
//! lists and page images scraped from the site's rendered HTML.

#[macro_use]
extern crate lazy_static;

pub mod config;
mod dom;
pub mod error;
pub mod extractor;
pub mod fetch;
mod selectors;
pub mod site;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use extractor::{BatoExtractor, Chapter, Context, Extractor, PageImage, SearchResult, SeriesDetails, Status};
pub use fetch::{Fetch, HttpFetcher};
pub use site::SiteExtractor;
