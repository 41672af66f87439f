use crate::parsers::{Extraction, Region, text};
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main").expect("valid main selector"));

static CONTAINER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.container").expect("valid container selector"));

/// Elements whose contents are never visible text
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Extracts the visible text of an HTML page.
///
/// Script and style contents are dropped, the first `<main>` element is
/// preferred, then the first `div.container`, then the whole document.
/// Text nodes are joined without separators, as if the tags were deleted,
/// and whitespace is then collapsed.
pub fn extract_visible_text(html: &str) -> Extraction {
    let doc = Html::parse_document(html);

    let (root, region) = if let Some(main) = doc.select(&MAIN_SELECTOR).next() {
        (main, Region::Main)
    } else if let Some(container) = doc.select(&CONTAINER_SELECTOR).next() {
        (container, Region::Container)
    } else {
        (doc.root_element(), Region::Document)
    };

    let mut raw = String::new();
    push_visible_text(root, &mut raw);

    Extraction::new(text::normalize_whitespace(&raw), region)
}

fn push_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    push_visible_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}
