//! Per-frame redraw orchestration.
//!
//! The coordinator is a two-state machine driven by host events. It asks for a display frame only
//! while an animated squiggle is attached and the surface has focus; the loop ends by simply not
//! asking again.

use crate::foundation::error::SquigglyResult;
use crate::layout::oracle::LineLayout;
use crate::layout::regions::decompose;
use crate::surface::backend::DrawSurface;
use crate::view::text::DecoratedText;

/// Scheduling state of a [`RenderCoordinator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameState {
    /// No frame requested.
    #[default]
    Idle,
    /// A frame has been requested and [`RenderCoordinator::on_frame`] is expected.
    Scheduled,
}

/// Redraw primitives of the hosting surface.
pub trait FrameHost {
    /// Redraw the surface as soon as possible.
    fn invalidate(&mut self);
    /// Call [`RenderCoordinator::on_frame`] on the next display frame.
    fn request_frame(&mut self);
}

/// Host that records requests; drive it with [`RecordingHost::take_frame_request`].
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    pub invalidations: u64,
    pub frame_requests: u64,
    pending: bool,
}

impl RecordingHost {
    /// Whether a frame was requested since the last call.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameHost for RecordingHost {
    fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
        self.pending = true;
    }
}

/// What a draw call produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub decorations: usize,
    pub regions: usize,
}

#[derive(Debug)]
pub struct RenderCoordinator {
    state: FrameState,
    animating: bool,
    focused: bool,
}

impl RenderCoordinator {
    pub fn new(focused: bool) -> Self {
        Self {
            state: FrameState::Idle,
            animating: false,
            focused,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Rescan `text` for animated squiggles and redraw it once.
    pub fn on_text_changed(&mut self, text: &DecoratedText, host: &mut dyn FrameHost) {
        self.animating = text.has_animated_decoration();
        tracing::trace!(animating = self.animating, "text changed");
        host.invalidate();
        self.schedule(host);
    }

    pub fn on_focus_changed(&mut self, focused: bool, host: &mut dyn FrameHost) {
        self.focused = focused;
        tracing::trace!(focused, "focus changed");
        if focused {
            host.invalidate();
            self.schedule(host);
        }
    }

    /// The display frame requested earlier has arrived.
    pub fn on_frame(&mut self, host: &mut dyn FrameHost) {
        if self.state != FrameState::Scheduled {
            tracing::trace!("stale frame callback ignored");
            return;
        }
        if !self.animating || !self.focused {
            self.state = FrameState::Idle;
            tracing::trace!(
                animating = self.animating,
                focused = self.focused,
                "animation loop stopped"
            );
            return;
        }
        host.invalidate();
        host.request_frame();
    }

    fn schedule(&mut self, host: &mut dyn FrameHost) {
        if self.animating && self.focused && self.state == FrameState::Idle {
            host.request_frame();
            self.state = FrameState::Scheduled;
            tracing::trace!("animation loop started");
        }
    }

    /// Draw every squiggle attached to `text` at `now_ms`.
    ///
    /// A missing layout draws nothing. Attachments the layout cannot resolve are reported.
    #[tracing::instrument(level = "trace", skip_all, fields(now_ms = now_ms))]
    pub fn draw<L: LineLayout + ?Sized>(
        &self,
        text: &mut DecoratedText,
        layout: Option<&L>,
        surface: &mut dyn DrawSurface,
        now_ms: u64,
    ) -> SquigglyResult<DrawStats> {
        let Some(layout) = layout else {
            tracing::debug!("no layout yet, skipping squiggle draw");
            return Ok(DrawStats::default());
        };

        let mut stats = DrawStats::default();
        let len = text.len_chars();
        for a in text.attached_decorations_mut(0..len) {
            let regions = decompose(layout, a.start, a.end)?;
            for r in &regions {
                a.squiggle.draw_line(surface, r.to_rect(), now_ms);
            }
            stats.decorations += 1;
            stats.regions += regions.len();
        }
        Ok(stats)
    }
}

impl Default for RenderCoordinator {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/coordinator.rs"]
mod tests;
