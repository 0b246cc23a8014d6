//! Heuristic extraction of the literal translated string from a verbose
//! model completion.
//!
//! LLM completions routed through a prompt-engineered translation
//! instruction sometimes wrap the answer in explanatory prose despite being
//! told not to. Extraction is two-tiered: an anchored phrase match first,
//! then the last double-quoted substring as a fallback.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::TranslateError;

fn anchor_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Case-sensitive; the content may span multiple lines.
    RE.get_or_init(|| Regex::new(r#"The text translates to: "((?s:.*?))""#).unwrap())
}

fn quoted_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]*)""#).unwrap())
}

/// Extract the translated text from a raw completion.
///
/// Tier 1 anchors on the expected reply phrasing. Tier 2 takes the last
/// quoted fragment, which tends to skip quoted pieces of the instruction
/// echoed back at the start of the completion. An empty winning candidate
/// counts as an extraction failure.
pub fn extract_translation(raw: &str) -> Result<String, TranslateError> {
    if let Some(caps) = anchor_regex().captures(raw) {
        let content = &caps[1];
        if !content.is_empty() {
            return Ok(content.to_string());
        }
    }

    let last_quoted = quoted_regex()
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .last()
        .map(|m| m.as_str().to_string());

    match last_quoted {
        Some(content) if !content.is_empty() => Ok(content),
        _ => Err(TranslateError::EmptyTranslation),
    }
}
