//! Error types shared by the fetcher and the extractors.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure, including the request timeout.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// A required structural anchor is not on the page.
    #[error("no {0} found")]
    MissingAnchor(&'static str),

    /// A positional lookup failed inside a chapter node.
    #[error("unexpected page structure: {0}")]
    Structure(String),

    #[error("pattern did not match: {0}")]
    Pattern(String),

    #[error("invalid release date: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
