use scraper::{ElementRef, Html, Selector};

use crate::app::{Result, ThreaderError};

/// Paragraphs carrying a class are usually ads, captions or widgets.
const PARAGRAPH_SELECTOR: &str = "p:not([class])";

/// A parsed web page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a page body. Bytes that are not valid UTF-8 are replaced.
    pub fn parse(body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        Self {
            html: Html::parse_document(&text),
        }
    }

    /// Concatenated text of every class-less `<p>`, in document order, with no separator.
    ///
    /// With a `container` selector only paragraphs inside its first match are used.
    /// Returns `None` when there is no body, no container match or no such paragraph;
    /// `Some("")` means paragraphs were found but hold no text.
    pub fn paragraph_text(&self, container: Option<&str>) -> Result<Option<String>> {
        let body_selector = parse_selector("body")?;
        let Some(body) = self.html.select(&body_selector).next() else {
            return Ok(None);
        };

        let root: ElementRef<'_> = match container {
            Some(css) => {
                let selector = parse_selector(css)?;
                match body.select(&selector).next() {
                    Some(element) => element,
                    None => return Ok(None),
                }
            }
            None => body,
        };

        let paragraph_selector = parse_selector(PARAGRAPH_SELECTOR)?;
        let mut found = false;
        let mut text = String::new();
        for paragraph in root.select(&paragraph_selector) {
            found = true;
            text.extend(paragraph.text());
        }

        Ok(found.then_some(text))
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ThreaderError::InvalidSelector(format!("{css}: {e:?}")))
}
