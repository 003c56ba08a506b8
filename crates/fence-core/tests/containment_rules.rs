//! Integration tests for the containment decision rule.
//!
//! These exercise the public `fence_core` API the way the hook adapter uses
//! it: build a `TargetRegion`, derive its allowed rectangle, and feed events
//! through `decide_clip`.

use fence_core::{decide_clip, ClipAction, ClipRect, HookEvent, Point, PointerMessage, TargetRegion};

/// Reference formulation of the rule: clip iff strictly outside on any axis.
fn should_clip(rect: &ClipRect, p: Point) -> bool {
    let right = i64::from(rect.x) + i64::from(rect.width);
    let bottom = i64::from(rect.y) + i64::from(rect.height);
    let (x, y) = (i64::from(p.x), i64::from(p.y));
    x < i64::from(rect.x) || x > right || y < i64::from(rect.y) || y > bottom
}

fn layouts() -> Vec<ClipRect> {
    vec![
        ClipRect::new(0, 0, 1920, 1080),
        ClipRect::new(1920, 0, 2560, 1440),
        ClipRect::new(-1280, -1024, 1280, 1024),
        ClipRect::new(3840, 200, 1, 1),
    ]
}

fn edge_samples(near: i32, far: i32) -> [i32; 6] {
    [near - 1, near, near + 1, far - 1, far, far + 1]
}

#[test]
fn test_decision_matches_strict_outside_rule_around_every_edge() {
    for rect in layouts() {
        // Each edge and one pixel either side of it, on both axes.
        let xs = edge_samples(rect.x, rect.right());
        let ys = edge_samples(rect.y, rect.bottom());

        for &x in &xs {
            for &y in &ys {
                let point = Point::new(x, y);
                let action = decide_clip(&rect, &HookEvent::movement(x, y));
                let expected = if should_clip(&rect, point) {
                    ClipAction::Clip(rect)
                } else {
                    ClipAction::Release
                };
                assert_eq!(action, expected, "rect {rect:?} point {point:?}");
            }
        }
    }
}

#[test]
fn test_full_hd_example_scenario() {
    // Arrange
    let region = TargetRegion::new(r"\\.\DISPLAY1", ClipRect::new(0, 0, 1920, 1080), true);
    let rect = region.allowed_rect().expect("full HD bounds are valid");

    // Act / Assert: on the far edge is inside
    assert_eq!(decide_clip(&rect, &HookEvent::movement(1920, 500)), ClipAction::Release);
    // one past the far edge clips
    assert_eq!(decide_clip(&rect, &HookEvent::movement(1921, 500)), ClipAction::Clip(rect));
    // centre releases
    assert_eq!(decide_clip(&rect, &HookEvent::movement(960, 500)), ClipAction::Release);
}

#[test]
fn test_non_movement_and_invalid_events_never_touch_the_clip() {
    let rect = ClipRect::new(0, 0, 1920, 1080);
    let far_outside = Point::new(10_000, -10_000);

    let event = |code, message| HookEvent {
        code,
        message,
        point: far_outside,
    };
    let events = [
        event(-1, PointerMessage::Move),
        event(i32::MIN, PointerMessage::Move),
        event(0, PointerMessage::Button),
        event(0, PointerMessage::Wheel),
        event(0, PointerMessage::from_raw(0x0209)),
    ];

    for event in events {
        assert_eq!(decide_clip(&rect, &event), ClipAction::Pass, "{event:?}");
    }
}

#[test]
fn test_degenerate_region_has_no_allowed_rect() {
    let region = TargetRegion::new(r"\\.\DISPLAY3", ClipRect::new(0, 0, 0, 0), false);
    assert!(region.allowed_rect().is_err());
}
