//! Turns an HTML page into plain text plus the hrefs that survive cleaning.

use scraper::{ElementRef, Html, Node};

/// Elements dropped together with everything inside them.
const DROPPED_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "table"];
const EDIT_SECTION_CLASS: &str = "mw-editsection";
/// Trailer sections whose content is dropped up to the next heading of equal
/// or higher level.
const TRAILER_SECTIONS: &[&str] = &["See_also", "References", "Bibliography", "Further_reading", "External_links"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanedPage {
    /// Non-empty text nodes, trimmed, joined with `\n`.
    pub text: String,
    /// Raw `href` values of anchors outside dropped content, in document order.
    pub links: Vec<String>,
}

pub fn clean_html(html: &str) -> CleanedPage {
    let doc = Html::parse_document(html);
    let mut cleaner = Cleaner::default();
    cleaner.visit(doc.root_element());
    CleanedPage { text: cleaner.lines.join("\n"), links: cleaner.links }
}

#[derive(Default)]
struct Cleaner {
    lines: Vec<String>,
    links: Vec<String>,
    /// Level of the trailer heading currently being skipped.
    skipping: Option<u8>,
}

impl Cleaner {
    fn visit(&mut self, el: ElementRef<'_>) {
        if is_dropped(el) {
            return;
        }
        let e = el.value();
        if let Some(level) = heading_level(e.name()) {
            if self.skipping.map_or(false, |l| level <= l) {
                self.skipping = None;
            }
            if self.skipping.is_none() && is_trailer_heading(el) {
                self.walk(el);
                self.skipping = Some(level);
                return;
            }
        }
        if self.skipping.is_none() && e.name() == "a" {
            if let Some(href) = e.attr("href") {
                self.links.push(href.to_string());
            }
        }
        self.walk(el);
    }

    fn walk(&mut self, el: ElementRef<'_>) {
        for child in el.children() {
            match child.value() {
                Node::Text(t) => {
                    let t = t.trim();
                    if self.skipping.is_none() && !t.is_empty() {
                        self.lines.push(t.to_string());
                    }
                }
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        self.visit(child);
                    }
                }
                _ => {}
            }
        }
    }
}

fn is_dropped(el: ElementRef<'_>) -> bool {
    let e = el.value();
    DROPPED_TAGS.contains(&e.name()) || e.classes().any(|c| c == EDIT_SECTION_CLASS)
}

fn heading_level(name: &str) -> Option<u8> {
    match name.as_bytes() {
        [b'h', d @ b'1'..=b'6'] => Some(d - b'0'),
        _ => None,
    }
}

fn is_trailer_name(s: &str) -> bool { TRAILER_SECTIONS.contains(&s) }

/// Matched by the heading's id, the id of any element inside it, or its
/// visible text with spaces as underscores.
fn is_trailer_heading(heading: ElementRef<'_>) -> bool {
    let by_id = heading
        .descendants()
        .filter_map(ElementRef::wrap)
        .any(|d| d.value().id().map_or(false, is_trailer_name));
    by_id || is_trailer_name(&visible_text(heading).trim().replace(' ', "_"))
}

fn visible_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child).filter(|c| !is_dropped(*c)) {
                    out.push_str(&visible_text(child));
                }
            }
            _ => {}
        }
    }
    out
}
