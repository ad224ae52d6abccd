//! Walks one axis of the visible window and yields drawable segments.

/// One visible, non-hidden row or column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Row or column index
    pub index: usize,
    /// Start edge (the previous index's cumulative position)
    pub start: f64,
    /// End edge (this index's cumulative position)
    pub end: f64,
}

impl Segment {
    /// Midpoint between the two edges
    pub fn middle(&self) -> f64 {
        self.start + (self.end - self.start) / 2.0
    }
}

/// Iterator over the segments of `start - 1 ..= end`.
///
/// Candidates before 0 or past the table are skipped. Candidates whose
/// cumulative position equals their predecessor's are hidden and skipped.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    accumulation: &'a [f64],
    next: i64,
    end: i64,
    previous: f64,
}

/// Segments for the window `[start, end]` extended one unit before `start`
/// so the boundary above the first visible index is drawn too.
pub fn visible_segments(accumulation: &[f64], start: i64, end: i64) -> Segments<'_> {
    let first = start.saturating_sub(1).max(0);
    let previous = first
        .checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| accumulation.get(i))
        .copied()
        .unwrap_or(0.0);

    Segments {
        accumulation,
        next: first,
        end,
        previous,
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    #[allow(clippy::float_cmp)]
    fn next(&mut self) -> Option<Segment> {
        while self.next <= self.end {
            let candidate = self.next;
            self.next += 1;

            let index = usize::try_from(candidate).ok()?;
            // Past the table: nothing further can be in range either.
            let position = *self.accumulation.get(index)?;

            if position == self.previous {
                continue;
            }

            let segment = Segment {
                index,
                start: self.previous,
                end: position,
            };
            self.previous = position;
            return Some(segment);
        }
        None
    }
}
