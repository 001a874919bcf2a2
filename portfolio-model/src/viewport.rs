//! Mobile/desktop viewport classification.

/// Widths at or below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 480;

pub fn classify(width: u32) -> bool {
    classify_with(width, MOBILE_BREAKPOINT_PX)
}

pub fn classify_with(width: u32, breakpoint: u32) -> bool {
    width <= breakpoint
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    breakpoint: u32,
    is_mobile: bool,
}

impl ViewportState {
    pub fn new(breakpoint: u32, width: u32) -> Self {
        Self {
            breakpoint,
            is_mobile: classify_with(width, breakpoint),
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Whether `width` falls in a different class than the current one.
    pub fn changes_class(&self, width: u32) -> bool {
        classify_with(width, self.breakpoint) != self.is_mobile
    }

    /// Reclassify for a new width. Returns true only when the class changed.
    pub fn observe(&mut self, width: u32) -> bool {
        if !self.changes_class(width) {
            return false;
        }
        self.is_mobile = !self.is_mobile;
        tracing::debug!(width, is_mobile = self.is_mobile, "viewport class changed");
        true
    }
}
