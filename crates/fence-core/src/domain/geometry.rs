//! Screen geometry in virtual-screen coordinates.
//!
//! The virtual screen spans every attached monitor.  The primary monitor's
//! top-left corner is (0, 0); monitors placed to the left of or above it have
//! negative coordinates.

use thiserror::Error;

/// Errors raised when a region cannot be turned into a clip rectangle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// The region has no area.
    #[error("region bounds are empty ({width}x{height})")]
    Empty { width: u32, height: u32 },

    /// The far edges of the region do not fit in 32-bit screen coordinates.
    #[error("region bounds exceed the screen coordinate range")]
    OutOfRange,
}

/// A pointer position in virtual-screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle the cursor may be clipped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClipRect {
    /// X coordinate of the left edge.
    pub x: i32,
    /// Y coordinate of the top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ClipRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the X coordinate of the right edge (`x + width`).
    ///
    /// Saturates for rectangles that have not passed [`ClipRect::validate`].
    pub fn right(&self) -> i32 {
        clamp_to_i32(i64::from(self.x) + i64::from(self.width))
    }

    /// Returns the Y coordinate of the bottom edge (`y + height`).
    pub fn bottom(&self) -> i32 {
        clamp_to_i32(i64::from(self.y) + i64::from(self.height))
    }

    /// Returns `true` if the rectangle has zero width or zero height.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Checks that the rectangle is usable as a cursor clip.
    ///
    /// # Errors
    ///
    /// - [`RegionError::Empty`] if either dimension is zero.
    /// - [`RegionError::OutOfRange`] if `x + width` or `y + height` overflows `i32`.
    pub fn validate(&self) -> Result<(), RegionError> {
        if self.is_empty() {
            return Err(RegionError::Empty {
                width: self.width,
                height: self.height,
            });
        }
        let right = i64::from(self.x) + i64::from(self.width);
        let bottom = i64::from(self.y) + i64::from(self.height);
        if right > i64::from(i32::MAX) || bottom > i64::from(i32::MAX) {
            return Err(RegionError::OutOfRange);
        }
        Ok(())
    }

    /// Returns `true` if `point` lies within the rectangle, edges included.
    ///
    /// Both the near edge (`x`, `y`) and the far edge (`x + width`,
    /// `y + height`) count as inside.  The far edge is one pixel past the last
    /// visible column/row of a monitor, so a pointer reported there is treated
    /// as contained.
    pub fn contains_inclusive(&self, point: Point) -> bool {
        let px = i64::from(point.x);
        let py = i64::from(point.y);
        let left = i64::from(self.x);
        let top = i64::from(self.y);

        px >= left
            && px <= left + i64::from(self.width)
            && py >= top
            && py <= top + i64::from(self.height)
    }
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// A display the pointer can be confined to.
///
/// Two regions are the same target when the device name, bounds, and primary
/// flag all match; a monitor that was moved or resized is a new target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetRegion {
    /// OS device name, e.g. `\\.\DISPLAY1` on Windows.
    pub device_name: String,
    /// Monitor bounds in virtual-screen coordinates.
    pub bounds: ClipRect,
    /// `true` for the primary display.
    pub is_primary: bool,
}

impl TargetRegion {
    pub fn new(device_name: impl Into<String>, bounds: ClipRect, is_primary: bool) -> Self {
        Self {
            device_name: device_name.into(),
            bounds,
            is_primary,
        }
    }

    /// Derives the rectangle the cursor is allowed to roam in.
    ///
    /// The allowed rectangle is the full monitor bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`RegionError`] if the bounds are empty or out of range.
    pub fn allowed_rect(&self) -> Result<ClipRect, RegionError> {
        self.bounds.validate()?;
        Ok(self.bounds)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hd() -> ClipRect {
        ClipRect::new(0, 0, 1920, 1080)
    }

    #[test]
    fn test_clip_rect_right_and_bottom_add_dimensions() {
        let rect = ClipRect::new(-1920, 100, 1920, 1200);
        assert_eq!(rect.right(), 0);
        assert_eq!(rect.bottom(), 1300);
    }

    #[test]
    fn test_clip_rect_right_saturates_for_oversized_width() {
        let rect = ClipRect::new(i32::MAX - 10, 0, 100, 100);
        assert_eq!(rect.right(), i32::MAX);
    }

    #[test]
    fn test_contains_inclusive_accepts_all_four_corners() {
        let rect = full_hd();
        assert!(rect.contains_inclusive(Point::new(0, 0)));
        assert!(rect.contains_inclusive(Point::new(1920, 0)));
        assert!(rect.contains_inclusive(Point::new(0, 1080)));
        assert!(rect.contains_inclusive(Point::new(1920, 1080)));
    }

    #[test]
    fn test_contains_inclusive_rejects_one_pixel_past_each_edge() {
        let rect = full_hd();
        assert!(!rect.contains_inclusive(Point::new(-1, 500)));
        assert!(!rect.contains_inclusive(Point::new(1921, 500)));
        assert!(!rect.contains_inclusive(Point::new(960, -1)));
        assert!(!rect.contains_inclusive(Point::new(960, 1081)));
    }

    #[test]
    fn test_contains_inclusive_handles_negative_origin() {
        // Secondary monitor to the left of the primary.
        let rect = ClipRect::new(-2560, -360, 2560, 1440);
        assert!(rect.contains_inclusive(Point::new(-1280, 0)));
        assert!(rect.contains_inclusive(Point::new(0, 1080)));
        assert!(!rect.contains_inclusive(Point::new(1, 0)));
    }

    #[test]
    fn test_contains_inclusive_does_not_overflow_near_i32_max() {
        let rect = ClipRect::new(i32::MAX - 5, 0, 10, 10);
        assert!(rect.contains_inclusive(Point::new(i32::MAX, 5)));
    }

    #[test]
    fn test_validate_accepts_normal_monitor() {
        assert_eq!(full_hd().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let rect = ClipRect::new(0, 0, 0, 1080);
        assert_eq!(
            rect.validate(),
            Err(RegionError::Empty {
                width: 0,
                height: 1080
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_height() {
        let rect = ClipRect::new(0, 0, 1920, 0);
        assert!(matches!(rect.validate(), Err(RegionError::Empty { .. })));
    }

    #[test]
    fn test_validate_rejects_far_edge_overflow() {
        let rect = ClipRect::new(i32::MAX - 10, 0, 100, 100);
        assert_eq!(rect.validate(), Err(RegionError::OutOfRange));

        let rect = ClipRect::new(0, 0, u32::MAX, 100);
        assert_eq!(rect.validate(), Err(RegionError::OutOfRange));
    }

    #[test]
    fn test_allowed_rect_is_full_monitor_bounds() {
        let region = TargetRegion::new(r"\\.\DISPLAY2", ClipRect::new(1920, 0, 2560, 1440), false);
        assert_eq!(region.allowed_rect(), Ok(ClipRect::new(1920, 0, 2560, 1440)));
    }

    #[test]
    fn test_allowed_rect_rejects_degenerate_bounds() {
        let region = TargetRegion::new(r"\\.\DISPLAY1", ClipRect::new(0, 0, 1920, 0), true);
        assert!(region.allowed_rect().is_err());
    }

    #[test]
    fn test_target_region_identity_includes_bounds() {
        let a = TargetRegion::new(r"\\.\DISPLAY1", full_hd(), true);
        let b = TargetRegion::new(r"\\.\DISPLAY1", ClipRect::new(0, 0, 2560, 1440), true);
        assert_ne!(a, b, "a resized monitor is a different target");
        assert_eq!(a, a.clone());
    }
}
