use std::fmt;
use std::ops::AddAssign;

/// Counters collected while walking the permutation tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Partial tours that passed the bound test and were descended into.
    pub expanded: u64,
    /// Partial tours rejected by the bound test.
    pub pruned: u64,
    /// Times the incumbent tour was replaced.
    pub improvements: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.expanded += other.expanded;
        self.pruned += other.pruned;
        self.improvements += other.improvements;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded={} pruned={} improvements={}",
            self.expanded, self.pruned, self.improvements
        )
    }
}
