use crate::dom::{
    element_children, has_children, labelled_parents, last_child, leading_text, nth_child,
    select_within, walk_path,
};
use crate::error::{Error, Result};
use crate::extractor::Extractor;
use crate::extractor::{Chapter, Context, PageImage, SearchResult, SeriesDetails, Status};
use crate::selectors::*;
use crate::SiteConfig;

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use scraper::{ElementRef, Html};

#[derive(Clone)]
pub struct BatoExtractor {
    base_url: String,
    no_thumbnail_url: String,
}

impl BatoExtractor {
    pub fn new(config: &SiteConfig) -> Self {
        BatoExtractor {
            base_url: config.base_url.clone(),
            no_thumbnail_url: config.no_thumbnail_url.clone(),
        }
    }

    fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("https://") || href.starts_with("http://") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }

    fn search_candidate(&self, entry: ElementRef<'_>) -> Option<SearchResult> {
        let divs = select_within(entry, &DIV);
        let (first, last) = (*divs.first()?, *divs.last()?);
        if !has_children(last) {
            return None;
        }
        let link = nth_child(first, 0)?;
        let href = link.value().attr("href").filter(|href| !href.is_empty())?;
        let cover_url = match select_within(link, &IMG).first() {
            Some(img) => img.value().attr("src").unwrap_or_default().to_string(),
            None => self.no_thumbnail_url.clone(),
        };
        Some(SearchResult {
            url: self.absolute_url(href),
            cover_url,
            name: String::new(),
        })
    }

    fn chapter(&self, node: ElementRef<'_>, context: &Context) -> Result<Chapter> {
        let link = nth_child(node, 0)
            .and_then(|inner| nth_child(inner, 0))
            .ok_or_else(|| Error::Structure("chapter entry without a link".to_string()))?;
        let href = link.value().attr("href").unwrap_or_default();
        let stamp = select_within(node, &TIME)
            .first()
            .and_then(|time| time.value().attr("time"))
            .ok_or_else(|| Error::Structure(format!("chapter {} has no release time", href)))?;

        let numbers = parse_chapter_url(href)?;
        let url = format!("{}{}", self.absolute_url(href), CHAPTER_URL_SUFFIX);
        Ok(Chapter {
            id: numbers.id,
            volume_number: numbers.volume,
            name: numbers.chapter.clone(),
            chapter_number: numbers.chapter,
            source_url: url.clone(),
            url,
            localization: LANGUAGE.to_string(),
            release_date: parse_release_date(stamp)?,
            description: context
                .get("description")
                .and_then(|value| value.as_str())
                .filter(|description| !description.is_empty())
                .map(str::to_string),
            context: context.clone(),
        })
    }
}

impl Extractor for BatoExtractor {
    fn extract_search(&self, html: &str) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let container = match document.select(&SEARCH_CONTAINER).next() {
            Some(container) => container,
            None => return Vec::new(),
        };
        if !element_children(container).any(|child| child.value().name() == "div") {
            return Vec::new();
        }
        element_children(container)
            .filter_map(|entry| self.search_candidate(entry))
            .collect()
    }

    fn extract_series(&self, html: &str, url: &str) -> SeriesDetails {
        let document = Html::parse_document(html);
        let info = match walk_path(&document, INFO_PANEL).into_iter().next() {
            Some(info) => info,
            None => return SeriesDetails::default(),
        };

        let publication = labelled_parents(&document, &SPAN, PUBLICATION_LABEL)
            .into_iter()
            .next();
        let status_text = publication
            .and_then(|row| nth_child(row, STATUS_CHILD))
            .map(leading_text)
            .unwrap_or_default()
            .to_lowercase();
        let status = Status::from_label(&status_text);
        let year_text = publication.and_then(last_child).map(leading_text);

        SeriesDetails {
            url: url.to_string(),
            name: select_within(info, &SERIES_NAME)
                .first()
                .map(|link| leading_text(*link))
                .unwrap_or_default(),
            description: document
                .select(&DESCRIPTION)
                .next()
                .map(leading_text)
                .unwrap_or_default(),
            poster_url: document
                .select(&POSTER)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(|src| src.replace("&amp;", "&"))
                .unwrap_or_default(),
            genres: genres(&document),
            authors: authors(info),
            original_language: labelled_parents(&document, &SPAN, LANGUAGE_LABEL)
                .first()
                .and_then(|row| last_child(*row))
                .map(leading_text)
                .unwrap_or_default(),
            year: parse_year(year_text.as_deref(), Utc::now().year()),
            status,
            complete: status == Status::Completed,
        }
    }

    fn extract_chapters(&self, html: &str, context: &Context) -> Result<Vec<Chapter>> {
        let document = Html::parse_document(html);
        let region = walk_path(&document, CHAPTER_REGION)
            .into_iter()
            .next()
            .ok_or(Error::MissingAnchor("chapter list"))?;
        element_children(region)
            .filter(|node| node.value().name() == "div")
            .map(|node| self.chapter(node, context))
            .collect()
    }

    fn extract_pages(&self, html: &str, context: &Context) -> Result<Vec<PageImage>> {
        let document = Html::parse_document(html);
        let island = document
            .select(&IMAGE_LIST)
            .next()
            .ok_or(Error::MissingAnchor("image list component"))?;
        let markup = island.html();
        let props = PROPS
            .captures(&markup)
            .and_then(|captures| captures.get(1))
            .ok_or_else(|| Error::Pattern("image list component has no props".to_string()))?;
        Ok(image_urls(props.as_str())
            .into_iter()
            .map(|url| PageImage {
                url,
                context: context.clone(),
            })
            .collect())
    }
}

fn genres(document: &Html) -> Vec<String> {
    labelled_parents(document, &BOLD, GENRES_LABEL)
        .into_iter()
        .flat_map(|row| select_within(row, &SPAN))
        .filter_map(|span| nth_child(span, 0))
        .map(leading_text)
        .collect()
}

fn authors(info: ElementRef<'_>) -> Vec<String> {
    let [outer, inner] = AUTHOR_BLOCK;
    nth_child(info, outer)
        .and_then(|row| nth_child(row, inner))
        .map(|block| {
            select_within(block, &ANCHOR)
                .into_iter()
                // the site double-escapes ampersands in author names
                .map(|link| leading_text(link).replace("amp;", ""))
                .collect()
        })
        .unwrap_or_default()
}

/// The number before the first hyphen, or `fallback`.
fn parse_year(text: Option<&str>, fallback: i32) -> i32 {
    text.and_then(|text| text.split('-').next())
        .and_then(|year| year.trim().parse().ok())
        .unwrap_or(fallback)
}

#[derive(Debug, PartialEq)]
struct ChapterNumbers {
    id: String,
    volume: f64,
    chapter: String,
}

fn parse_chapter_url(href: &str) -> Result<ChapterNumbers> {
    let captures = CHAPTER_URL
        .captures(href)
        .ok_or_else(|| Error::Pattern(format!("unrecognized chapter URL {}", href)))?;
    let volume = match captures.get(2) {
        Some(volume) => volume
            .as_str()
            .parse()
            .map_err(|_| Error::Pattern(format!("bad volume in {}", href)))?,
        None => 1.0,
    };
    Ok(ChapterNumbers {
        id: captures[1].to_string(),
        volume,
        chapter: captures[3].to_string(),
    })
}

fn parse_release_date(stamp: &str) -> Result<DateTime<Utc>> {
    Ok(NaiveDateTime::parse_from_str(stamp, RELEASE_DATE_FORMAT)?.and_utc())
}

/// Image URLs from the serialized `props` payload, in payload order.
fn image_urls(props: &str) -> Vec<String> {
    IMAGE_URL
        .captures_iter(props)
        .map(|captures| captures[1].replace("&amp;", "&"))
        .collect()
}
