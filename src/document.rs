//! Document content model: stories, destinations, link sources and links.
//!
//! The hyperlink scanner does not talk to a host application directly; it
//! goes through the [`DocumentModel`] trait, which exposes the handful of
//! content-model operations it needs. [`InMemoryDocument`] is the standalone
//! implementation, also used by tests so every case gets an isolated
//! destination registry.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::span::TextSpan;

/// Identifier of one story (text unit) within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoryId(pub u32);

/// Identifier of a link destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DestinationId(pub u32);

/// Identifier of a link source (a text range a link is attached to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub u32);

/// Identifier of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(pub u32);

/// One independently addressable block of rich text content.
#[derive(Debug, Clone)]
pub struct Story {
    /// Story identifier
    pub id: StoryId,
    /// Current text content
    pub content: String,
}

/// A named URL target, recorded at most once per distinct URL in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Destination identifier
    pub id: DestinationId,
    /// Destination URL; doubles as the registry name
    pub url: String,
}

/// A reference to a text span that a hyperlink is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSource {
    /// Source identifier
    pub id: SourceId,
    /// Story the span lives in
    pub story: StoryId,
    /// Character span of the link text
    pub span: TextSpan,
}

/// A hyperlink associating a source span with a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Link identifier
    pub id: LinkId,
    /// Text range the link is attached to
    pub source: SourceId,
    /// Target the link navigates to
    pub destination: DestinationId,
}

/// Content-model operations the hyperlink scanner requires from its host.
pub trait DocumentModel {
    /// All story ids, in document order.
    fn story_ids(&self) -> Vec<StoryId>;

    /// Current content of a story.
    fn story_content(&self, story: StoryId) -> Result<String>;

    /// Replace the characters covered by `span` with `replacement`.
    ///
    /// `span` is interpreted against the story's content as it exists at
    /// call time.
    fn replace_range(&mut self, story: StoryId, span: TextSpan, replacement: &str) -> Result<()>;

    /// Look up an existing destination by URL.
    fn find_destination(&self, url: &str) -> Option<DestinationId>;

    /// Create a destination for `url`. Empty URLs are rejected.
    fn create_destination(&mut self, url: &str) -> Result<DestinationId>;

    /// Create a link source over `span` in `story`.
    fn create_link_source(&mut self, story: StoryId, span: TextSpan) -> Result<SourceId>;

    /// Create a link associating `source` with `destination`.
    fn create_link(&mut self, source: SourceId, destination: DestinationId) -> Result<LinkId>;
}

/// Standalone in-memory document.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    stories: Vec<Story>,
    destinations: IndexMap<String, Destination>,
    sources: Vec<LinkSource>,
    links: Vec<Link>,
}

impl InMemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a story and return its id.
    pub fn add_story(&mut self, content: impl Into<String>) -> StoryId {
        let id = StoryId(self.stories.len() as u32);
        self.stories.push(Story {
            id,
            content: content.into(),
        });
        id
    }

    /// All stories, in document order.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// All destinations, in creation order.
    pub fn destinations(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.values()
    }

    /// Number of destinations in the registry.
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    /// All link sources, in creation order.
    pub fn sources(&self) -> &[LinkSource] {
        &self.sources
    }

    /// All links, in creation order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    fn story(&self, id: StoryId) -> Result<&Story> {
        self.stories
            .get(id.0 as usize)
            .ok_or(Error::StoryNotFound(id.0))
    }

    fn story_mut(&mut self, id: StoryId) -> Result<&mut Story> {
        self.stories
            .get_mut(id.0 as usize)
            .ok_or(Error::StoryNotFound(id.0))
    }
}

impl DocumentModel for InMemoryDocument {
    fn story_ids(&self) -> Vec<StoryId> {
        self.stories.iter().map(|s| s.id).collect()
    }

    fn story_content(&self, story: StoryId) -> Result<String> {
        Ok(self.story(story)?.content.clone())
    }

    fn replace_range(&mut self, story: StoryId, span: TextSpan, replacement: &str) -> Result<()> {
        let story = self.story_mut(story)?;
        let len = story.content.chars().count();
        if span.start > span.end || span.end > len {
            return Err(Error::InvalidSpan {
                start: span.start,
                end: span.end,
                len,
            });
        }
        let start = char_to_byte(&story.content, span.start);
        let end = char_to_byte(&story.content, span.end);
        story.content.replace_range(start..end, replacement);
        Ok(())
    }

    fn find_destination(&self, url: &str) -> Option<DestinationId> {
        self.destinations.get(url).map(|d| d.id)
    }

    fn create_destination(&mut self, url: &str) -> Result<DestinationId> {
        if url.is_empty() {
            return Err(Error::MalformedLink {
                url: String::new(),
                reason: "empty URL".to_string(),
            });
        }
        // The registry holds at most one destination per URL.
        if let Some(existing) = self.destinations.get(url) {
            return Ok(existing.id);
        }
        let id = DestinationId(self.destinations.len() as u32);
        self.destinations.insert(
            url.to_string(),
            Destination {
                id,
                url: url.to_string(),
            },
        );
        Ok(id)
    }

    fn create_link_source(&mut self, story: StoryId, span: TextSpan) -> Result<SourceId> {
        let len = self.story(story)?.content.chars().count();
        if span.end > len {
            return Err(Error::InvalidSpan {
                start: span.start,
                end: span.end,
                len,
            });
        }
        let id = SourceId(self.sources.len() as u32);
        self.sources.push(LinkSource { id, story, span });
        Ok(id)
    }

    fn create_link(&mut self, source: SourceId, destination: DestinationId) -> Result<LinkId> {
        let id = LinkId(self.links.len() as u32);
        self.links.push(Link {
            id,
            source,
            destination,
        });
        Ok(id)
    }
}

/// Byte offset of the character at char index `index`.
///
/// `index` equal to the char count maps to the end of the string.
fn char_to_byte(s: &str, index: usize) -> usize {
    s.char_indices()
        .nth(index)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}
