use crate::event::DutyStatus;

/// Half-open interval `[start_ms, end_ms)` spent in a single duty status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start_ms: i64,
    pub end_ms: i64,
    pub status: DutyStatus,
}

impl Segment {
    pub fn new(start_ms: i64, end_ms: i64, status: DutyStatus) -> Self {
        Self {
            start_ms,
            end_ms,
            status,
        }
    }

    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Portion of this segment inside `[from_ms, to_ms)`, if any.
    pub fn clip(&self, from_ms: i64, to_ms: i64) -> Option<Segment> {
        let start_ms = self.start_ms.max(from_ms);
        let end_ms = self.end_ms.min(to_ms);
        (end_ms > start_ms).then_some(Segment {
            start_ms,
            end_ms,
            status: self.status,
        })
    }
}
