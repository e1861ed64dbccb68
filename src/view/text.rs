use std::ops::Range;

use crate::foundation::error::{SquigglyError, SquigglyResult};
use crate::span::squiggle::Squiggle;

/// A squiggle attached to the half-open character range `[start, end)`.
pub struct Attachment {
    pub squiggle: Box<dyn Squiggle>,
    pub start: usize,
    pub end: usize,
}

impl Attachment {
    fn overlaps(&self, range: &Range<usize>) -> bool {
        self.start <= range.end && self.end >= range.start
    }
}

/// Text plus the squiggles attached to it, in attachment order.
///
/// Later attachments draw on top of earlier ones.
pub struct DecoratedText {
    text: String,
    len_chars: usize,
    attachments: Vec<Attachment>,
}

impl DecoratedText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len_chars = text.chars().count();
        Self {
            text,
            len_chars,
            attachments: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters (the unit of every offset).
    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    pub fn attach(
        &mut self,
        squiggle: impl Squiggle + 'static,
        range: Range<usize>,
    ) -> SquigglyResult<()> {
        self.attach_boxed(Box::new(squiggle), range)
    }

    pub fn attach_boxed(
        &mut self,
        squiggle: Box<dyn Squiggle>,
        range: Range<usize>,
    ) -> SquigglyResult<()> {
        if range.start > range.end || range.end > self.len_chars {
            return Err(SquigglyError::layout(format!(
                "cannot attach to {}..{} of text with {} chars",
                range.start, range.end, self.len_chars
            )));
        }
        self.attachments.push(Attachment {
            squiggle,
            start: range.start,
            end: range.end,
        });
        Ok(())
    }

    pub fn detach_all(&mut self) {
        self.attachments.clear();
    }

    pub fn len_attachments(&self) -> usize {
        self.attachments.len()
    }

    /// Attachments touching `range`, in attachment order.
    pub fn attached_decorations(&self, range: Range<usize>) -> impl Iterator<Item = &Attachment> {
        self.attachments.iter().filter(move |a| a.overlaps(&range))
    }

    pub fn attached_decorations_mut(
        &mut self,
        range: Range<usize>,
    ) -> impl Iterator<Item = &mut Attachment> {
        self.attachments.iter_mut().filter(move |a| a.overlaps(&range))
    }

    pub fn has_animated_decoration(&self) -> bool {
        self.attached_decorations(0..self.len_chars)
            .any(|a| a.squiggle.is_animated())
    }
}
