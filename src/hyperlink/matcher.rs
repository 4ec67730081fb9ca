//! Anchor token matching.
//!
//! A token is `<a href=Q URL Q>LABEL</a>` where `Q` is one of the accepted
//! quote glyphs, URL is any run of characters excluding that glyph and LABEL
//! is any run of characters excluding `<`. Matching is case-sensitive on the
//! literal `<a href=` / `</a>` parts.

use lazy_static::lazy_static;
use regex::Regex;

/// Quote glyphs accepted around the URL.
///
/// Straight double quote plus the directional and guillemet pairs seen in
/// content pasted from word processors. The glyph that opens the URL must
/// also close it; the set is enumerated here rather than folded into one
/// alternation so the accepted delimiters stay auditable.
pub const QUOTE_GLYPHS: [char; 5] = ['"', '\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'];

lazy_static! {
    /// One compiled pattern per accepted quote glyph.
    static ref ANCHOR_PATTERNS: Vec<Regex> = QUOTE_GLYPHS
        .iter()
        .map(|&glyph| {
            let q = regex::escape(&glyph.to_string());
            Regex::new(&format!("<a href={q}([^{q}]*){q}>([^<]*)</a>")).unwrap()
        })
        .collect();
}

/// One matched anchor token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorMatch {
    /// Byte offset of the start of the full token (`<a href=...`)
    pub start: usize,
    /// Byte offset one past the end of the full token (`...</a>`)
    pub end: usize,
    /// Destination URL, as written between the quote glyphs
    pub url: String,
    /// Visible label text
    pub label: String,
}

impl AnchorMatch {
    /// Byte length of the full matched token.
    pub fn token_len(&self) -> usize {
        self.end - self.start
    }
}

/// Find the earliest anchor token at or after byte offset `from`.
///
/// When patterns for two glyphs both match, the one starting first wins.
/// Returns `None` once no token remains.
pub fn find_anchor(text: &str, from: usize) -> Option<AnchorMatch> {
    let mut best: Option<AnchorMatch> = None;
    for pattern in ANCHOR_PATTERNS.iter() {
        let Some(caps) = pattern.captures_at(text, from) else {
            continue;
        };
        let full = caps.get(0).expect("capture 0 always present");
        if best.as_ref().is_some_and(|b| b.start <= full.start()) {
            continue;
        }
        best = Some(AnchorMatch {
            start: full.start(),
            end: full.end(),
            url: caps[1].to_string(),
            label: caps[2].to_string(),
        });
    }
    best
}
