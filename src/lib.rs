//! Squiggly draws animated wavy underlines beneath ranges of laid-out text.
//!
//! The pieces, bottom-up:
//!
//! - [`decompose`] splits a character range into one [`LineRegion`] per visual line, using any
//!   host layout that implements [`LineLayout`]
//! - [`WaveSpan`] (or any other [`Squiggle`]) tessellates a sine polyline under each region and
//!   strokes it onto a [`DrawSurface`]
//! - [`RenderCoordinator`] keeps display frames coming while an animated squiggle is attached and
//!   the surface has focus
//!
//! [`SquigglyTextView`] ties these together for a host; [`Scene`] loads a JSON description of a
//! decorated text block for offline rendering.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod layout;
pub(crate) mod span;
pub(crate) mod surface;
pub(crate) mod view;

pub use crate::foundation::core::{Affine, BezPath, Direction, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{SquigglyError, SquigglyResult};
pub use crate::foundation::math::dp;

pub use crate::animation::clock::{
    CycleDuration, ManualTimeSource, SystemTimeSource, TimeSource, phase, progress,
};
pub use crate::config::color::ColorDef;
pub use crate::config::scene::{DecorationDef, Scene, SceneDef, SceneRenderer};
pub use crate::config::style::SquiggleDef;
pub use crate::layout::mono::{MonoLayoutOpts, MonospaceLayout, detect_direction};
pub use crate::layout::oracle::{LineLayout, LineSpacing};
pub use crate::layout::regions::{LineRegion, decompose};
pub use crate::span::color::ColorSource;
pub use crate::span::squiggle::{Squiggle, StrokeCache};
pub use crate::span::tessellate::{
    MAX_SAMPLES_PER_PX, SEGMENTS_PER_PERIOD, WaveGeometry, point_count, tessellate,
};
pub use crate::span::wave::{
    DEFAULT_AMPLITUDE_DP, DEFAULT_LINE_WIDTH_DP, DEFAULT_WAVE_PERIOD_DP, WaveSpan,
};
pub use crate::surface::backend::{Cap, DrawSurface, Join, Offset, StrokeStyle};
pub use crate::surface::corner::CornerRounding;
pub use crate::surface::cpu::{CpuSurface, FrameRGBA};
pub use crate::surface::recording::{RecordingSurface, StrokeCall};
pub use crate::surface::svg::SvgSurface;
pub use crate::view::coordinator::{
    DrawStats, FrameHost, FrameState, RecordingHost, RenderCoordinator,
};
pub use crate::view::text::{Attachment, DecoratedText};
pub use crate::view::text_view::SquigglyTextView;
