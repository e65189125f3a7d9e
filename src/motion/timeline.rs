//! Scroll-scrubbed reveal timeline.
//!
//! Maps the distance scrolled through a pinned section onto per-item
//! entrance frames. Everything here is plain math so the mapping can be
//! exercised without a browser: the component layer feeds in a scroll
//! offset and reads back transform/opacity values.

/// Resting placement of one grid item, in percent of the pinned frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Off-screen starting displacement, in percent of the item's own size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// One visual element of the animated grid. `position` is fixed at
/// construction; progress comes from the shared timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealItem {
    pub position: Rect,
    pub entry_offset: Vec2,
}

/// Scale the items start at before they settle to 1.
const ENTRY_SCALE: f64 = 0.9;

/// The shared timeline. `stagger` and `width` are normalized to the
/// timeline's [0,1] range: item `i` owns the sub-interval
/// `[i * stagger, i * stagger + width]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTimeline {
    distance: f64,
    stagger: f64,
    width: f64,
}

impl RevealTimeline {
    pub fn new(distance: f64, stagger: f64, width: f64) -> Self {
        Self { distance, stagger, width }
    }

    /// Builds the timeline from authoring units: each of `items` tweens
    /// runs for `duration` units and starts `step` units after the
    /// previous one. The whole sequence is scrubbed over `distance`
    /// pixels of scroll.
    pub fn staggered(items: usize, step: f64, duration: f64, distance: f64) -> Self {
        let total = items.saturating_sub(1) as f64 * step + duration;
        Self {
            distance,
            stagger: step / total,
            width: duration / total,
        }
    }

    /// Global progress T for a scroll offset into the pinned range.
    /// Offsets outside [0, distance] clamp to 0 or 1.
    pub fn global_progress(&self, scrolled: f64) -> f64 {
        clamp01(scrolled / self.distance)
    }

    /// Local progress of item `index` at global progress `t`. Earlier
    /// items start (and finish) no later than later ones.
    pub fn item_progress(&self, t: f64, index: usize) -> f64 {
        let start = index as f64 * self.stagger;
        clamp01((t - start) / self.width)
    }
}

/// Interpolated visual parameters for one item. Local progress 0 means
/// fully displaced, scaled down and transparent; 1 means at rest. The
/// interpolation is linear: the timeline is scrubbed by scroll, not
/// eased over time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemFrame {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl ItemFrame {
    pub fn at(item: &RevealItem, local_progress: f64) -> Self {
        let p = clamp01(local_progress);
        let remaining = 1.0 - p;
        Self {
            translate_x: item.entry_offset.x * remaining,
            translate_y: item.entry_offset.y * remaining,
            scale: ENTRY_SCALE + (1.0 - ENTRY_SCALE) * p,
            opacity: p,
        }
    }
}

pub fn clamp01(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(offset_x: f64, offset_y: f64) -> RevealItem {
        RevealItem {
            position: Rect { top: 10.0, left: 10.0, width: 24.0, height: 26.0 },
            entry_offset: Vec2 { x: offset_x, y: offset_y },
        }
    }

    #[test]
    fn global_progress_clamps_outside_scrub_range() {
        let timeline = RevealTimeline::staggered(9, 0.12, 1.0, 1200.0);
        assert_eq!(timeline.global_progress(-300.0), 0.0);
        assert_eq!(timeline.global_progress(0.0), 0.0);
        assert_eq!(timeline.global_progress(1200.0), 1.0);
        assert_eq!(timeline.global_progress(5000.0), 1.0);
        assert!((timeline.global_progress(600.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn item_progress_matches_sub_interval_formula() {
        // clamp((0.5 - 2 * 0.12) / 0.3) = 0.8667
        let timeline = RevealTimeline::new(1200.0, 0.12, 0.3);
        let local = timeline.item_progress(0.5, 2);
        assert!((local - 0.866_666_6).abs() < 1e-6);
    }

    #[test]
    fn stagger_ordering_is_monotonic() {
        let timeline = RevealTimeline::staggered(9, 0.12, 1.0, 1200.0);
        for t in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            for i in 0..8 {
                assert!(
                    timeline.item_progress(t, i) >= timeline.item_progress(t, i + 1),
                    "item {} should not lag item {} at t={}",
                    i,
                    i + 1,
                    t
                );
            }
        }
    }

    #[test]
    fn staggered_layout_spans_the_whole_timeline() {
        let timeline = RevealTimeline::staggered(9, 0.12, 1.0, 1200.0);
        // First item starts at the very beginning.
        assert_eq!(timeline.item_progress(0.0, 0), 0.0);
        assert!(timeline.item_progress(1e-9, 0) > 0.0);
        // Last item completes when the timeline does.
        assert!(timeline.item_progress(0.99, 8) < 1.0);
        assert!((timeline.item_progress(1.0, 8) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn frame_endpoints() {
        let item = item(-140.0, -80.0);
        let start = ItemFrame::at(&item, 0.0);
        assert_eq!(start.translate_x, -140.0);
        assert_eq!(start.translate_y, -80.0);
        assert_eq!(start.scale, 0.9);
        assert_eq!(start.opacity, 0.0);

        let end = ItemFrame::at(&item, 1.0);
        assert_eq!(end.translate_x, 0.0);
        assert_eq!(end.translate_y, 0.0);
        assert_eq!(end.scale, 1.0);
        assert_eq!(end.opacity, 1.0);
    }

    #[test]
    fn frame_interpolation_is_linear() {
        let item = item(100.0, 40.0);
        let mid = ItemFrame::at(&item, 0.5);
        assert!((mid.translate_x - 50.0).abs() < 1e-9);
        assert!((mid.translate_y - 20.0).abs() < 1e-9);
        assert!((mid.scale - 0.95).abs() < 1e-9);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn frame_clamps_out_of_range_progress() {
        let item = item(100.0, 40.0);
        assert_eq!(ItemFrame::at(&item, -0.5), ItemFrame::at(&item, 0.0));
        assert_eq!(ItemFrame::at(&item, 1.5), ItemFrame::at(&item, 1.0));
    }
}
