//! Every structural assumption about the site's markup lives here.
//!
//! Paths start below `<html>`; `nth` is zero-based, so `div[3]` in the
//! site's XPath terms is `nth: Some(2)`.

use crate::dom::Step;
use regex::Regex;
use scraper::Selector;

const fn all(tag: &'static str) -> Step {
    Step { tag, nth: None }
}

const fn nth(tag: &'static str, n: usize) -> Step {
    Step { tag, nth: Some(n) }
}

/// `/html/body/div/main/div[1]/div[2]`
pub const INFO_PANEL: &[Step] = &[all("body"), all("div"), all("main"), nth("div", 0), nth("div", 1)];

/// `/html/body/div/main/div[3]/astro-island/div/div[2]/div/div/astro-slot`
pub const CHAPTER_REGION: &[Step] = &[
    all("body"),
    all("div"),
    all("main"),
    nth("div", 2),
    all("astro-island"),
    all("div"),
    nth("div", 1),
    all("div"),
    all("div"),
    all("astro-slot"),
];

/// Authors sit under the info panel's second child, in its fourth child.
pub const AUTHOR_BLOCK: [usize; 2] = [1, 3];
/// Position of the status text among the "Original Publication:" row's
/// children.
pub const STATUS_CHILD: usize = 2;

pub const GENRES_LABEL: &str = "Genres:";
pub const LANGUAGE_LABEL: &str = "Tr From";
pub const PUBLICATION_LABEL: &str = "Original Publication:";

pub const CHAPTER_URL_SUFFIX: &str = "?load=2";
pub const LANGUAGE: &str = "en";

lazy_static! {
    pub static ref SEARCH_CONTAINER: Selector = Selector::parse(r#"div[data-hk="0-0-2"]"#).unwrap();
    pub static ref SERIES_NAME: Selector = Selector::parse("h3 > a").unwrap();
    pub static ref DESCRIPTION: Selector = Selector::parse("div.prose > div").unwrap();
    pub static ref POSTER: Selector = Selector::parse(r#"img[data-hk="0-1-0"]"#).unwrap();
    pub static ref IMAGE_LIST: Selector =
        Selector::parse(r#"astro-island[component-url*="/_astro/ImageList."]"#).unwrap();

    pub static ref ANCHOR: Selector = Selector::parse("a").unwrap();
    pub static ref BOLD: Selector = Selector::parse("b").unwrap();
    pub static ref DIV: Selector = Selector::parse("div").unwrap();
    pub static ref IMG: Selector = Selector::parse("img").unwrap();
    pub static ref SPAN: Selector = Selector::parse("span").unwrap();
    pub static ref TIME: Selector = Selector::parse("time").unwrap();

    pub static ref CHAPTER_URL: Regex =
        Regex::new(r"^/title/.+/([0-9]+)(?:-vol_([0-9]+))?-ch_([0-9.]+)").unwrap();
    pub static ref PROPS: Regex = Regex::new(r#"props="(.*?\})""#).unwrap();
    // Escaped quotes in the payload leave a backslash after every URL.
    pub static ref IMAGE_URL: Regex = Regex::new(r"(https://[A-Za-z0-9_.?&;=/-]+)\\").unwrap();
}

pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%6fZ";
