use super::*;
use crate::foundation::core::Direction;
use crate::layout::mono::{MonoLayoutOpts, MonospaceLayout};
use crate::span::wave::WaveSpan;
use crate::surface::recording::RecordingSurface;

fn animated_text() -> DecoratedText {
    let mut t = DecoratedText::new("hello world again");
    t.attach(WaveSpan::default(), 2..15).unwrap();
    t
}

fn layout(text: &str) -> MonospaceLayout {
    MonospaceLayout::new(
        text,
        MonoLayoutOpts {
            columns: 10,
            advance: 10.0,
            glyph_height: 20.0,
            direction: Some(Direction::Ltr),
            ..MonoLayoutOpts::default()
        },
    )
    .unwrap()
}

#[test]
fn no_animated_squiggles_never_schedules() {
    let mut c = RenderCoordinator::new(true);
    let mut host = RecordingHost::default();

    let mut t = DecoratedText::new("plain");
    c.on_text_changed(&t, &mut host);
    assert_eq!(c.state(), FrameState::Idle);

    let mut still = WaveSpan::default();
    still.set_animated(false);
    t.attach(still, 0..5).unwrap();
    c.on_text_changed(&t, &mut host);
    c.on_focus_changed(true, &mut host);
    c.on_frame(&mut host);

    assert_eq!(c.state(), FrameState::Idle);
    assert_eq!(host.frame_requests, 0);
    // Text changes still redraw once.
    assert_eq!(host.invalidations, 3);
}

#[test]
fn animated_squiggle_keeps_loop_running_while_focused() {
    let mut c = RenderCoordinator::new(true);
    let mut host = RecordingHost::default();
    c.on_text_changed(&animated_text(), &mut host);
    assert_eq!(c.state(), FrameState::Scheduled);

    for _ in 0..100 {
        assert!(host.take_frame_request());
        c.on_frame(&mut host);
        assert_eq!(c.state(), FrameState::Scheduled);
    }
    assert_eq!(host.frame_requests, 101);
    assert_eq!(host.invalidations, 101);
}

#[test]
fn repeated_text_changes_do_not_stack_loops() {
    let mut c = RenderCoordinator::new(true);
    let mut host = RecordingHost::default();
    let t = animated_text();
    c.on_text_changed(&t, &mut host);
    c.on_text_changed(&t, &mut host);
    c.on_text_changed(&t, &mut host);
    assert_eq!(host.frame_requests, 1);
    assert_eq!(host.invalidations, 3);
}

#[test]
fn losing_focus_stops_on_next_frame() {
    let mut c = RenderCoordinator::new(true);
    let mut host = RecordingHost::default();
    c.on_text_changed(&animated_text(), &mut host);

    c.on_focus_changed(false, &mut host);
    assert_eq!(c.state(), FrameState::Scheduled);
    assert!(host.take_frame_request());
    c.on_frame(&mut host);
    assert_eq!(c.state(), FrameState::Idle);
    assert!(!host.take_frame_request());

    c.on_focus_changed(true, &mut host);
    assert_eq!(c.state(), FrameState::Scheduled);
    assert!(host.take_frame_request());
}

#[test]
fn unfocused_text_change_does_not_schedule() {
    let mut c = RenderCoordinator::new(false);
    let mut host = RecordingHost::default();
    c.on_text_changed(&animated_text(), &mut host);
    assert_eq!(c.state(), FrameState::Idle);
    assert_eq!(host.invalidations, 1);
    assert_eq!(host.frame_requests, 0);
}

#[test]
fn removing_squiggles_ends_loop() {
    let mut c = RenderCoordinator::new(true);
    let mut host = RecordingHost::default();
    let mut t = animated_text();
    c.on_text_changed(&t, &mut host);

    t.detach_all();
    c.on_text_changed(&t, &mut host);
    assert!(host.take_frame_request());
    c.on_frame(&mut host);
    assert_eq!(c.state(), FrameState::Idle);
    assert_eq!(host.frame_requests, 1);
}

#[test]
fn stale_frame_while_idle_is_ignored() {
    let mut c = RenderCoordinator::new(true);
    let mut host = RecordingHost::default();
    c.on_frame(&mut host);
    assert_eq!(c.state(), FrameState::Idle);
    assert_eq!(host.invalidations, 0);
}

#[test]
fn draw_renders_one_stroke_per_line_region() {
    let c = RenderCoordinator::new(true);
    let mut t = animated_text();
    let l = layout(t.as_str());
    let mut rec = RecordingSurface::new();
    let stats = c.draw(&mut t, Some(&l), &mut rec, 0).unwrap();

    assert_eq!(
        stats,
        DrawStats {
            decorations: 1,
            regions: 3,
        }
    );
    assert_eq!(rec.calls.len(), 3);
    assert_eq!(rec.calls[0].points[0].x, 22.0);
    assert_eq!(rec.calls[1].points.last().unwrap().x, 48.0);
}

#[test]
fn draw_without_layout_is_a_no_op() {
    let c = RenderCoordinator::new(true);
    let mut t = animated_text();
    let mut rec = RecordingSurface::new();
    let stats = c
        .draw::<MonospaceLayout>(&mut t, None, &mut rec, 0)
        .unwrap();
    assert_eq!(stats, DrawStats::default());
    assert!(rec.calls.is_empty());
}

#[test]
fn draw_reports_attachment_past_layout_text() {
    let c = RenderCoordinator::new(true);
    let mut t = animated_text();
    let l = layout("short");
    let mut rec = RecordingSurface::new();
    assert!(matches!(
        c.draw(&mut t, Some(&l), &mut rec, 0),
        Err(crate::SquigglyError::Layout(_))
    ));
}

#[test]
fn zero_length_attachment_draws_nothing() {
    let c = RenderCoordinator::new(true);
    let mut t = DecoratedText::new("hello");
    t.attach(WaveSpan::default(), 3..3).unwrap();
    let l = layout(t.as_str());
    let mut rec = RecordingSurface::new();
    let stats = c.draw(&mut t, Some(&l), &mut rec, 0).unwrap();
    assert_eq!(stats.regions, 1);
    assert!(rec.calls.is_empty());
}
