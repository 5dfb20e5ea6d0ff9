//! Text normalization for scraped program records
//!
//! Program titles and descriptions arrive from an external scraping
//! pipeline and can carry zero-width characters, control characters, HTML
//! entities, and irregular whitespace. The CLI cleans them here before
//! classification; the core functions themselves stay byte-faithful to
//! their input.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Normalize a scraped title or description
///
/// Steps: strip zero-width characters, strip control characters, decode
/// HTML entities, collapse whitespace runs, trim.
pub fn normalize_text(text: &str) -> String {
    let mut result = remove_zero_width(text);
    result = remove_control_chars(&result);
    result = html_escape::decode_html_entities(&result).into_owned();
    // Non-breaking spaces from &nbsp; fold into regular whitespace
    result = result.replace('\u{A0}', " ");
    result = WHITESPACE_REGEX.replace_all(&result, " ").into_owned();
    result.trim().to_string()
}

/// Remove zero-width spaces and similar invisible characters
pub fn remove_zero_width(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(*c,
                '\u{200B}'..='\u{200F}' |
                '\u{2028}'..='\u{202F}' |
                '\u{FEFF}'
            )
        })
        .collect()
}

/// Remove control characters except newline and tab
pub fn remove_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}
