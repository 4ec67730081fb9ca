//! Anchor scanning and link materialization.

use crate::document::{DocumentModel, StoryId};
use crate::error::Result;
use crate::hyperlink::matcher::find_anchor;
use crate::span::TextSpan;

/// Summary of one document-wide hyperlink scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Stories scanned
    pub stories_scanned: usize,
    /// Anchor tokens matched (including ones whose link creation failed)
    pub matches: usize,
    /// Links successfully created
    pub links_created: usize,
    /// Destinations newly created (reused destinations are not counted)
    pub destinations_created: usize,
    /// Matches whose destination/source/link creation failed
    pub failures: usize,
}

/// A matched token carried from the rewrite pass into link creation.
#[derive(Debug)]
struct PendingLink {
    url: String,
    label: String,
    /// Label's span in the rewritten buffer, char offsets
    span: TextSpan,
}

/// Scans stories for anchor markup and attaches links to the label text.
///
/// Stories are processed strictly sequentially: a later story's scan never
/// begins before the prior story's replacements and link creations have
/// completed, since all of them mutate one shared destination registry.
#[derive(Debug, Default)]
pub struct HyperlinkExtractor;

impl HyperlinkExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Scan every story of `doc`, replacing anchor tokens with their labels
    /// and creating destination/link objects for each.
    ///
    /// A failed link creation is logged and counted but never aborts the
    /// scan; the remaining matches and stories are still processed. Running
    /// the scan again on the processed document is a no-op.
    pub fn process_document<D: DocumentModel>(&self, doc: &mut D) -> Result<ScanReport> {
        let mut report = ScanReport::default();
        for story in doc.story_ids() {
            self.scan_story(doc, story, &mut report)?;
        }
        log::info!(
            "hyperlink scan complete: {} links ({} new destinations, {} failures) across {} stories",
            report.links_created,
            report.destinations_created,
            report.failures,
            report.stories_scanned
        );
        Ok(report)
    }

    /// Scan a single story.
    ///
    /// The rewrite is a single forward pass copying unmatched spans and
    /// substituted labels into a fresh buffer, so label spans come out in
    /// final-buffer coordinates directly and no running offset has to be
    /// maintained across replacements.
    fn scan_story<D: DocumentModel>(
        &self,
        doc: &mut D,
        story: StoryId,
        report: &mut ScanReport,
    ) -> Result<()> {
        let content = doc.story_content(story)?;

        let mut out = String::with_capacity(content.len());
        let mut out_chars = 0usize;
        let mut pending: Vec<PendingLink> = Vec::new();
        let mut cursor = 0usize;

        while let Some(m) = find_anchor(&content, cursor) {
            let prefix = &content[cursor..m.start];
            out.push_str(prefix);
            out_chars += prefix.chars().count();

            let label_chars = m.label.chars().count();
            pending.push(PendingLink {
                url: m.url,
                label: m.label.clone(),
                span: TextSpan::new(out_chars, out_chars + label_chars),
            });
            out.push_str(&m.label);
            out_chars += label_chars;
            cursor = m.end;
        }

        if pending.is_empty() {
            // Nothing matched: leave the story untouched.
            report.stories_scanned += 1;
            return Ok(());
        }
        out.push_str(&content[cursor..]);

        let content_chars = content.chars().count();
        doc.replace_range(story, TextSpan::new(0, content_chars), &out)?;
        report.matches += pending.len();

        for link in pending {
            let destination = match doc.find_destination(&link.url) {
                Some(existing) => existing,
                None => match doc.create_destination(&link.url) {
                    Ok(created) => {
                        report.destinations_created += 1;
                        created
                    },
                    Err(e) => {
                        log::warn!("skipping link '{}' -> '{}': {}", link.label, link.url, e);
                        report.failures += 1;
                        continue;
                    },
                },
            };
            let source = match doc.create_link_source(story, link.span) {
                Ok(source) => source,
                Err(e) => {
                    log::warn!("no link source for '{}': {}", link.url, e);
                    report.failures += 1;
                    continue;
                },
            };
            match doc.create_link(source, destination) {
                Ok(_) => report.links_created += 1,
                Err(e) => {
                    log::warn!("link creation failed for '{}': {}", link.url, e);
                    report.failures += 1;
                },
            }
        }

        report.stories_scanned += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::InMemoryDocument;

    fn scan(doc: &mut InMemoryDocument) -> ScanReport {
        HyperlinkExtractor::new().process_document(doc).unwrap()
    }

    #[test]
    fn test_single_token_replaced() {
        let mut doc = InMemoryDocument::new();
        let story = doc.add_story(r#"pay at <a href="https://pay.test">the portal</a> today"#);
        let report = scan(&mut doc);

        assert_eq!(doc.story_content(story).unwrap(), "pay at the portal today");
        assert_eq!(report.links_created, 1);
        assert_eq!(report.failures, 0);
        let source = doc.sources()[0];
        assert_eq!(source.span, TextSpan::new(7, 17));
    }

    #[test]
    fn test_offset_bookkeeping_across_matches() {
        let mut doc = InMemoryDocument::new();
        let story = doc.add_story(r#"<a href="u">AB</a> text <a href="v">C</a>"#);
        scan(&mut doc);

        assert_eq!(doc.story_content(story).unwrap(), "AB text C");
        assert_eq!(doc.sources()[0].span, TextSpan::new(0, 2));
        assert_eq!(doc.sources()[1].span, TextSpan::new(8, 9));
    }

    #[test]
    fn test_idempotent_on_processed_buffer() {
        let mut doc = InMemoryDocument::new();
        doc.add_story(r#"<a href="u">AB</a> tail"#);
        scan(&mut doc);
        let report = scan(&mut doc);

        assert_eq!(report.matches, 0);
        assert_eq!(report.links_created, 0);
        assert_eq!(doc.links().len(), 1);
        assert_eq!(doc.stories()[0].content, "AB tail");
    }

    #[test]
    fn test_shared_url_creates_one_destination() {
        let mut doc = InMemoryDocument::new();
        doc.add_story(r#"<a href="same">x</a> <a href="same">y</a>"#);
        let report = scan(&mut doc);

        assert_eq!(report.links_created, 2);
        assert_eq!(report.destinations_created, 1);
        assert_eq!(doc.destination_count(), 1);
        let dest = doc.links()[0].destination;
        assert_eq!(doc.links()[1].destination, dest);
    }

    #[test]
    fn test_empty_url_reported_not_fatal() {
        let mut doc = InMemoryDocument::new();
        let story = doc.add_story(r#"<a href="">bad</a> then <a href="ok">good</a>"#);
        let report = scan(&mut doc);

        // Both tokens are replaced; only the valid one produces a link.
        assert_eq!(doc.story_content(story).unwrap(), "bad then good");
        assert_eq!(report.matches, 2);
        assert_eq!(report.failures, 1);
        assert_eq!(report.links_created, 1);
    }

    #[test]
    fn test_label_longer_than_token() {
        // Replacement can grow the buffer; span arithmetic must still hold.
        let mut doc = InMemoryDocument::new();
        let story = doc.add_story("<a href=\"u\">a considerably longer label</a>!");
        scan(&mut doc);

        assert_eq!(
            doc.story_content(story).unwrap(),
            "a considerably longer label!"
        );
        assert_eq!(doc.sources()[0].span, TextSpan::new(0, 27));
    }

    #[test]
    fn test_multiple_stories_sequential() {
        let mut doc = InMemoryDocument::new();
        doc.add_story(r#"<a href="u">one</a>"#);
        doc.add_story("plain");
        doc.add_story(r#"<a href="u">two</a>"#);
        let report = scan(&mut doc);

        assert_eq!(report.stories_scanned, 3);
        assert_eq!(report.links_created, 2);
        // Second story reuses the first story's destination.
        assert_eq!(report.destinations_created, 1);
    }

    #[test]
    fn test_arabic_content_char_spans() {
        let mut doc = InMemoryDocument::new();
        let story = doc.add_story("موقع <a href=\"https://ad.test\">اللوحة</a> هنا");
        scan(&mut doc);

        assert_eq!(doc.story_content(story).unwrap(), "موقع اللوحة هنا");
        // Spans count characters, not bytes.
        assert_eq!(doc.sources()[0].span, TextSpan::new(5, 11));
    }
}
