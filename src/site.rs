//! The public operations. Each fetches one page and hands it to the
//! extractor; any failure is logged here and turned into empty output.

use tracing::{debug, error};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::extractor::{BatoExtractor, Chapter, Context, Extractor, PageImage, SearchResult, SeriesDetails};
use crate::fetch::{Fetch, HttpFetcher};
use crate::selectors::LANGUAGE;

pub struct SiteExtractor<F = HttpFetcher> {
    config: SiteConfig,
    fetcher: F,
    extractor: BatoExtractor,
}

impl SiteExtractor<HttpFetcher> {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(SiteExtractor::with_fetcher(config, fetcher))
    }
}

impl<F: Fetch> SiteExtractor<F> {
    pub fn with_fetcher(config: SiteConfig, fetcher: F) -> Self {
        SiteExtractor {
            extractor: BatoExtractor::new(&config),
            config,
            fetcher,
        }
    }

    /// Searches for `query`. Every candidate costs one more request, for its
    /// detail page; candidates whose detail page yields no name are dropped.
    pub async fn search_results(&self, query: &str, language: Option<&str>) -> Vec<SearchResult> {
        debug!(query, "searching");
        if let Some(language) = language.filter(|language| *language != LANGUAGE) {
            debug!(language, "unsupported search language");
            return Vec::new();
        }

        let candidates = match self.search_candidates(query).await {
            Ok(candidates) => candidates,
            Err(err) => {
                error!(error = %err, query, "error while searching");
                return Vec::new();
            }
        };

        let mut results = Vec::with_capacity(candidates.len());
        for mut candidate in candidates {
            let name = self.series_details(&candidate.url).await.name;
            if name.is_empty() {
                debug!(url = %candidate.url, "dropping search result without a name");
                continue;
            }
            candidate.name = name;
            results.push(candidate);
        }
        results
    }

    async fn search_candidates(&self, query: &str) -> Result<Vec<SearchResult>> {
        let word = query.to_lowercase();
        let html = self
            .fetcher
            .fetch(&self.config.search_url(), &[("word", word.as_str()), ("lang", LANGUAGE)])
            .await?;
        Ok(self.extractor.extract_search(&html))
    }

    pub async fn series_details(&self, url: &str) -> SeriesDetails {
        debug!(url, "getting series");
        match self.fetcher.fetch(url, &[]).await {
            Ok(html) => self.extractor.extract_series(&html, url),
            Err(err) => {
                error!(error = %err, url, "error while getting series");
                SeriesDetails::default()
            }
        }
    }

    pub async fn chapter_list(&self, url: &str, context: &Context) -> Vec<Chapter> {
        debug!(url, "getting chapters");
        let chapters = match self.fetcher.fetch(url, &[]).await {
            Ok(html) => self.extractor.extract_chapters(&html, context),
            Err(err) => Err(err),
        };
        chapters.unwrap_or_else(|err| {
            error!(error = %err, url, "error while getting chapters");
            Vec::new()
        })
    }

    pub async fn page_images(&self, url: &str, context: &Context) -> Vec<PageImage> {
        debug!(url, "getting pages");
        let pages = match self.fetcher.fetch(url, &[]).await {
            Ok(html) => self.extractor.extract_pages(&html, context),
            Err(err) => Err(err),
        };
        pages.unwrap_or_else(|err| {
            error!(error = %err, url, "error while getting pages");
            Vec::new()
        })
    }
}
