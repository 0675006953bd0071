use reqwest::{Client, ClientBuilder};
use scraper::{Html, Selector};
use std::time::Duration;
use once_cell::sync::Lazy;
use crate::error::{AppError, Result};

/// A paragraph qualifies only if its trimmed text is strictly longer than this.
pub const MIN_PARAGRAPH_CHARS: usize = 50;

/// At most this many qualifying paragraphs make it into the summary.
pub const MAX_PARAGRAPHS: usize = 30;

/// Qualifying paragraphs are joined with a blank line.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

// Create static selectors to avoid recompiling them each time
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p").expect("Failed to parse paragraph selector")
});

/// Build the shared HTTP client used for all outbound page fetches.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
}

pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(AppError::Fetch(format!(
            "unexpected status {} from {}",
            response.status(),
            url
        )));
    }
    let html = response.text().await?;
    Ok(html)
}

/// Collect the text of every `<p>` element whose trimmed content is longer
/// than [`MIN_PARAGRAPH_CHARS`], in document order.
///
/// The parser recovers from malformed markup, so non-HTML bodies simply
/// yield no paragraphs rather than an error.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&PARAGRAPH_SELECTOR)
        .filter_map(|element| {
            let text: String = element.text().collect();
            let trimmed = text.trim();
            if trimmed.chars().count() > MIN_PARAGRAPH_CHARS {
                Some(trimmed.to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Join the first [`MAX_PARAGRAPHS`] candidates into the final summary text.
pub fn join_summary(paragraphs: &[String]) -> String {
    paragraphs
        .iter()
        .take(MAX_PARAGRAPHS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

/// Full extraction pipeline: fetch the page, pull out qualifying paragraphs
/// and join them. Zero candidates is reported as [`AppError::NoContent`].
pub async fn summarize_url(client: &Client, url: &str) -> Result<String> {
    let html = fetch_html(client, url).await?;
    let paragraphs = extract_paragraphs(&html);

    if paragraphs.is_empty() {
        return Err(AppError::NoContent);
    }

    Ok(join_summary(&paragraphs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(paragraphs: &[String]) -> String {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<p>{}</p>", p))
            .collect();
        format!("<html><head><title>t</title></head><body>{}</body></html>", body)
    }

    fn text_of_len(prefix: &str, len: usize) -> String {
        assert!(prefix.len() <= len);
        format!("{}{}", prefix, "x".repeat(len - prefix.len()))
    }

    #[test]
    fn keeps_only_paragraphs_longer_than_fifty_chars() {
        let html = page(&[
            text_of_len("short ", 10),
            text_of_len("first ", 60),
            text_of_len("second ", 70),
        ]);
        let paragraphs = extract_paragraphs(&html);
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].starts_with("first"));
        assert!(paragraphs[1].starts_with("second"));
    }

    #[test]
    fn fifty_chars_exactly_does_not_qualify() {
        let html = page(&[text_of_len("", 50), text_of_len("", 51)]);
        let paragraphs = extract_paragraphs(&html);
        assert_eq!(paragraphs, vec![text_of_len("", 51)]);
    }

    #[test]
    fn length_is_measured_after_trimming() {
        // 60 raw chars, but only 40 once the padding is stripped
        let padded = format!("          {}          ", "x".repeat(40));
        let html = page(&[padded]);
        assert!(extract_paragraphs(&html).is_empty());
    }

    #[test]
    fn text_of_nested_inline_elements_is_collected() {
        let html = "<html><body><p>A paragraph with a <a href=\"#\">link</a> and \
                    <strong>bold text</strong> mixed into its content.</p></body></html>";
        let paragraphs = extract_paragraphs(html);
        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].contains("link"));
        assert!(paragraphs[0].contains("bold text"));
    }

    #[test]
    fn document_without_paragraphs_yields_nothing() {
        let html = "<html><body><div>just a div, no paragraph elements</div></body></html>";
        assert!(extract_paragraphs(html).is_empty());
    }

    #[test]
    fn non_html_body_degrades_to_no_paragraphs() {
        let body = r#"{"message": "this endpoint returns JSON, not a web page at all"}"#;
        assert!(extract_paragraphs(body).is_empty());
    }

    #[test]
    fn summary_caps_at_thirty_paragraphs_in_document_order() {
        let paragraphs: Vec<String> = (0..35)
            .map(|i| text_of_len(&format!("paragraph {:02} ", i), 60))
            .collect();
        let html = page(&paragraphs);

        let extracted = extract_paragraphs(&html);
        assert_eq!(extracted.len(), 35);

        let summary = join_summary(&extracted);
        let joined: Vec<&str> = summary.split(PARAGRAPH_SEPARATOR).collect();
        assert_eq!(joined.len(), 30);
        assert!(joined[0].starts_with("paragraph 00"));
        assert!(joined[29].starts_with("paragraph 29"));
        assert!(!summary.contains("paragraph 30"));
        assert!(!summary.contains("paragraph 34"));
    }

    #[test]
    fn summary_joins_with_a_blank_line() {
        let html = page(&[text_of_len("one ", 55), text_of_len("two ", 55)]);
        let summary = join_summary(&extract_paragraphs(&html));
        assert_eq!(summary.matches("\n\n").count(), 1);
    }

    #[test]
    fn extraction_is_deterministic_for_a_fixed_document() {
        let html = page(&[
            text_of_len("alpha ", 80),
            text_of_len("beta ", 65),
            text_of_len("gamma ", 120),
        ]);
        let first = join_summary(&extract_paragraphs(&html));
        let second = join_summary(&extract_paragraphs(&html));
        assert_eq!(first, second);
    }
}
