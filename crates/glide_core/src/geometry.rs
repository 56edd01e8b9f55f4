//! Strip geometry
//!
//! A horizontally laid out strip of equally sized cards is described by the
//! width of one card and the gap between neighbours. Geometry is read from the
//! rendered strip whenever an operation needs it rather than cached across
//! layouts.

/// Card width and inter-card gap measured from a rendered strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    /// Width of a single card in pixels
    pub card_width: f32,
    /// Gap between two neighbouring cards in pixels
    pub gap: f32,
}

impl CardMetrics {
    pub fn new(card_width: f32, gap: f32) -> Self {
        Self { card_width, gap }
    }

    /// Distance between the leading edges of two neighbouring cards
    pub fn step(&self) -> f32 {
        self.card_width + self.gap
    }

    /// Whether position math is possible with these metrics
    ///
    /// A zero-width card (nothing rendered yet) or non-finite values are not
    /// measurable.
    pub fn is_measurable(&self) -> bool {
        self.card_width.is_finite()
            && self.gap.is_finite()
            && self.card_width > 0.0
            && self.gap >= 0.0
    }

    /// `Some(self)` if measurable
    pub fn measured(self) -> Option<Self> {
        self.is_measurable().then_some(self)
    }

    /// Scroll offset that aligns `slot` with the strip's leading edge
    pub fn offset_of(&self, slot: usize) -> f32 {
        slot as f32 * self.step()
    }

    /// Nearest slot to a scroll offset (may be negative or past the end)
    pub fn nearest_slot(&self, offset: f32) -> i64 {
        (offset / self.step()).round() as i64
    }
}
