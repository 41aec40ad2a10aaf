//! Tree walking over parsed pages. Child indexes count elements only.

use scraper::{ElementRef, Html, Selector};

/// One hop of a positional path: the element children named `tag`, or only
/// the `nth` (zero-based) of them.
pub struct Step {
    pub tag: &'static str,
    pub nth: Option<usize>,
}

impl Step {
    fn apply<'a>(&self, node: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let mut matching = element_children(node).filter(|child| child.value().name() == self.tag);
        match self.nth {
            Some(n) => matching.nth(n).into_iter().collect(),
            None => matching.collect(),
        }
    }
}

/// All elements reached by following `path` down from `<html>`, in document
/// order.
pub fn walk_path<'a>(document: &'a Html, path: &[Step]) -> Vec<ElementRef<'a>> {
    let mut current = vec![document.root_element()];
    for step in path {
        current = current.into_iter().flat_map(|node| step.apply(node)).collect();
        if current.is_empty() {
            break;
        }
    }
    current
}

pub fn element_children<'a>(node: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    node.children().filter_map(ElementRef::wrap)
}

pub fn nth_child(node: ElementRef<'_>, n: usize) -> Option<ElementRef<'_>> {
    element_children(node).nth(n)
}

pub fn last_child(node: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element_children(node).last()
}

pub fn has_children(node: ElementRef<'_>) -> bool {
    element_children(node).next().is_some()
}

/// Descendants of `node` matching `selector`, never `node` itself.
pub fn select_within<'a>(node: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    node.select(selector)
        .filter(|found| found.id() != node.id())
        .collect()
}

/// Text before the first child node, trimmed. Empty when the element opens
/// straight into a child.
pub fn leading_text(node: ElementRef<'_>) -> String {
    node.children()
        .map_while(|child| child.value().as_text().map(|text| &**text))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parents of every `selector` match carrying a text node exactly equal to
/// `label`.
pub fn labelled_parents<'a>(
    document: &'a Html,
    selector: &Selector,
    label: &str,
) -> Vec<ElementRef<'a>> {
    document
        .select(selector)
        .filter(|node| {
            node.children()
                .any(|child| child.value().as_text().map_or(false, |text| &**text == label))
        })
        .filter_map(|node| node.parent().and_then(ElementRef::wrap))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn walk_path_indexes_by_tag() {
        let document = Html::parse_document(
            "<html><body><div><p>skip</p><div id=\"a\"></div><div id=\"b\"><span>x</span></div></div></body></html>",
        );
        let path = [
            Step { tag: "body", nth: None },
            Step { tag: "div", nth: None },
            Step { tag: "div", nth: Some(1) },
            Step { tag: "span", nth: None },
        ];
        let found = walk_path(&document, &path);
        assert_eq!(found.len(), 1);
        assert_eq!(leading_text(found[0]), "x");

        let missing = [Step { tag: "main", nth: None }];
        assert!(walk_path(&document, &missing).is_empty());
    }

    #[test]
    fn leading_text_stops_at_first_child() {
        let document = Html::parse_document("<p id=\"t\">  head <b>bold</b> tail</p>");
        let p = document.select(&selector("#t")).next().unwrap();
        assert_eq!(leading_text(p), "head");

        let document = Html::parse_document("<p id=\"t\"><b>bold</b> tail</p>");
        let p = document.select(&selector("#t")).next().unwrap();
        assert_eq!(leading_text(p), "");
    }

    #[test]
    fn labelled_parents_needs_exact_text() {
        let document = Html::parse_document(
            "<div id=\"one\"><span>Tr From</span><span>Japanese</span></div>\
             <div id=\"two\"><span>Tr From:</span><span>Korean</span></div>",
        );
        let parents = labelled_parents(&document, &selector("span"), "Tr From");
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].value().id(), Some("one"));
        assert_eq!(leading_text(last_child(parents[0]).unwrap()), "Japanese");
    }

    #[test]
    fn select_within_skips_self() {
        let document = Html::parse_document("<div id=\"outer\"><div id=\"inner\"></div></div>");
        let outer = document.select(&selector("#outer")).next().unwrap();
        let found = select_within(outer, &selector("div"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value().id(), Some("inner"));
        assert!(!has_children(found[0]));
        assert!(nth_child(outer, 0).is_some());
    }
}
