//! Back-to-top visibility with per-frame scroll coalescing.

/// How the viewport returns to the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMotion {
    Instant,
    Smooth,
}

impl ScrollMotion {
    pub fn for_preference(prefers_reduced_motion: bool) -> Self {
        if prefers_reduced_motion {
            Self::Instant
        } else {
            Self::Smooth
        }
    }
}

pub struct BackToTop {
    threshold: f64,
    visible: bool,
    frame_pending: bool,
}

impl BackToTop {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
            frame_pending: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// A scroll event arrived. Returns true if the host must schedule a frame;
    /// false while one is already pending.
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// The scheduled frame ran: recompute and release the busy flag.
    pub fn on_frame(&mut self, scroll_y: f64) -> bool {
        self.frame_pending = false;
        self.update(scroll_y)
    }

    /// Recompute visibility for `scroll_y`.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        self.visible = scroll_y > self.threshold;
        self.visible
    }
}
