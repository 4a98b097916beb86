//! Narrow query capability over parsed forecast markup.
//!
//! The extractor only ever needs "all elements matching a selector" and
//! "text of the first match", so that is all this exposes.

use scraper::{ElementRef, Html, Selector};

pub trait DocumentQuery {
    type Node<'a>: DocumentQuery
    where
        Self: 'a;

    /// Every element matching `selector`, in document order.
    fn find_all<'a>(&'a self, selector: &str) -> Vec<Self::Node<'a>>;

    /// Concatenated text of this node and its descendants.
    fn text(&self) -> String;

    /// Text of the first element matching `selector`, or empty.
    fn first_text(&self, selector: &str) -> String {
        self.find_all(selector).first().map(|node| node.text()).unwrap_or_default()
    }
}

/// A forecast page parsed into a DOM.
#[derive(Debug)]
pub struct ForecastPage {
    html: Html,
}

impl ForecastPage {
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            tracing::debug!(count = html.errors.len(), "markup parsed with recoverable errors");
        }
        Self { html }
    }
}

fn compile(selector: &str) -> Option<Selector> {
    Selector::parse(selector)
        .inspect_err(|e| tracing::warn!(selector, error = %e, "ignoring invalid selector"))
        .ok()
}

impl DocumentQuery for ForecastPage {
    type Node<'a> = ElementRef<'a>;

    fn find_all<'a>(&'a self, selector: &str) -> Vec<ElementRef<'a>> {
        compile(selector).map(|sel| self.html.select(&sel).collect()).unwrap_or_default()
    }

    fn text(&self) -> String {
        self.html.root_element().text().collect()
    }
}

impl<'d> DocumentQuery for ElementRef<'d> {
    type Node<'a>
        = ElementRef<'a>
    where
        Self: 'a;

    fn find_all<'a>(&'a self, selector: &str) -> Vec<ElementRef<'a>> {
        compile(selector).map(|sel| self.select(&sel).collect()).unwrap_or_default()
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}
