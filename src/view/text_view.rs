use crate::animation::clock::TimeSource;
use crate::foundation::core::Vec2;
use crate::foundation::error::SquigglyResult;
use crate::layout::oracle::LineLayout;
use crate::surface::backend::{DrawSurface, Offset};
use crate::view::coordinator::{DrawStats, FrameHost, FrameState, RenderCoordinator};
use crate::view::text::DecoratedText;

/// Host-side glue: a text block, its layout, and the coordinator that animates its squiggles.
///
/// `insets` is the distance from the surface origin to the top-left of the laid-out text.
pub struct SquigglyTextView<L> {
    text: DecoratedText,
    layout: Option<L>,
    insets: Vec2,
    coordinator: RenderCoordinator,
}

impl<L: LineLayout> SquigglyTextView<L> {
    pub fn new(focused: bool) -> Self {
        Self {
            text: DecoratedText::new(""),
            layout: None,
            insets: Vec2::ZERO,
            coordinator: RenderCoordinator::new(focused),
        }
    }

    pub fn with_insets(mut self, insets: Vec2) -> Self {
        self.insets = insets;
        self
    }

    pub fn insets(&self) -> Vec2 {
        self.insets
    }

    pub fn text(&self) -> &DecoratedText {
        &self.text
    }

    pub fn layout(&self) -> Option<&L> {
        self.layout.as_ref()
    }

    pub fn state(&self) -> FrameState {
        self.coordinator.state()
    }

    /// Replace text and layout together.
    pub fn set_content(&mut self, text: DecoratedText, layout: Option<L>, host: &mut dyn FrameHost) {
        self.text = text;
        self.layout = layout;
        self.coordinator.on_text_changed(&self.text, host);
    }

    /// Mutate the text in place (attach or detach squiggles) and notify the coordinator.
    pub fn edit_text(&mut self, host: &mut dyn FrameHost, f: impl FnOnce(&mut DecoratedText)) {
        f(&mut self.text);
        self.coordinator.on_text_changed(&self.text, host);
    }

    pub fn on_window_focus_changed(&mut self, focused: bool, host: &mut dyn FrameHost) {
        self.coordinator.on_focus_changed(focused, host);
    }

    pub fn on_animation_frame(&mut self, host: &mut dyn FrameHost) {
        self.coordinator.on_frame(host);
    }

    /// Draw pass: squiggles are drawn in text space shifted by the view insets.
    pub fn draw(&mut self, surface: &mut dyn DrawSurface, now_ms: u64) -> SquigglyResult<DrawStats> {
        let mut shifted = Offset::new(surface, self.insets);
        self.coordinator
            .draw(&mut self.text, self.layout.as_ref(), &mut shifted, now_ms)
    }

    /// [`Self::draw`] at the current time of `clock`.
    pub fn draw_with_clock(
        &mut self,
        surface: &mut dyn DrawSurface,
        clock: &dyn TimeSource,
    ) -> SquigglyResult<DrawStats> {
        self.draw(surface, clock.now_ms())
    }
}
