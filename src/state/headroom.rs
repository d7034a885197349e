/// Header visibility driven by scroll position
///
/// The header stays pinned while the page is within the fixed zone at the
/// top, or while the user scrolls up. Scrolling down past the zone
/// releases (collapses) it.

/// Scroll offset below which the header is always shown
pub const PIN_THRESHOLD: f32 = 140.0;

/// Transition reported by [`Headroom::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadroomEvent {
    /// Entered the fixed zone at the top of the page
    Fixed,
    /// Revealed again by scrolling up outside the fixed zone
    Pinned,
    /// Collapsed by scrolling down outside the fixed zone
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Headroom {
    fixed_at: f32,
    previous: f32,
    pinned: bool,
}

impl Default for Headroom {
    fn default() -> Self {
        Self::new(PIN_THRESHOLD)
    }
}

impl Headroom {
    pub fn new(fixed_at: f32) -> Self {
        Self {
            fixed_at,
            previous: 0.0,
            pinned: true,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Feed the current scroll offset; returns the transition, if any.
    ///
    /// An unchanged offset (content or viewport resized) keeps the current state.
    pub fn update(&mut self, current: f32) -> Option<HeadroomEvent> {
        if current == self.previous {
            return None;
        }
        let fixed = is_fixed(current, self.fixed_at);
        let pinned = fixed || current < self.previous;
        let was_fixed = is_fixed(self.previous, self.fixed_at);

        let event = if fixed && !was_fixed {
            Some(HeadroomEvent::Fixed)
        } else if pinned && !self.pinned {
            Some(HeadroomEvent::Pinned)
        } else if !pinned && self.pinned {
            Some(HeadroomEvent::Released)
        } else {
            None
        };

        self.previous = current;
        self.pinned = pinned;
        event
    }
}

fn is_fixed(offset: f32, fixed_at: f32) -> bool {
    offset <= fixed_at
}
