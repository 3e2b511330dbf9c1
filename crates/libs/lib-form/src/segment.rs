//! Identifier segment state (email or phone).

/// The mutually-exclusive identifier mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Segment {
    #[default]
    Email,
    Phone,
}

impl Segment {
    pub fn name(&self) -> &'static str {
        match self {
            Segment::Email => "email",
            Segment::Phone => "phone",
        }
    }

    /// The segment that is hidden while `self` is active.
    pub fn other(&self) -> Segment {
        match self {
            Segment::Email => Segment::Phone,
            Segment::Phone => Segment::Email,
        }
    }
}

/// A completed segment transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentChange {
    pub from: Segment,
    pub to: Segment,
}

/// Tracks which segment is active.
#[derive(Debug, Default)]
pub struct SegmentController {
    active: Segment,
}

impl SegmentController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Segment {
        self.active
    }

    /// Activate `requested`.
    ///
    /// Returns `None` when `requested` is already active, so re-clicking the
    /// active option triggers nothing downstream.
    pub fn select(&mut self, requested: Segment) -> Option<SegmentChange> {
        if requested == self.active {
            return None;
        }

        let change = SegmentChange {
            from: self.active,
            to: requested,
        };
        self.active = requested;
        tracing::debug!("[Form] Segment switched from {} to {}", change.from.name(), change.to.name());
        Some(change)
    }
}
