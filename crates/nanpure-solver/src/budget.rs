//! Search-node accounting.

/// A global cap on the number of search nodes a solving run may expand.
///
/// One instance is threaded through the whole recursion, so the cap bounds
/// the entire tree rather than a single branch.
///
/// # Examples
///
/// ```
/// use nanpure_solver::SearchBudget;
///
/// let mut budget = SearchBudget::new(2);
/// assert!(budget.consume());
/// assert!(budget.consume());
/// assert!(!budget.consume());
/// assert!(budget.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    remaining: u32,
}

impl SearchBudget {
    /// Default node cap used by [`Solver::solve`](crate::Solver::solve).
    pub const DEFAULT_NODES: u32 = 10_000;

    /// Creates a budget allowing `nodes` node expansions.
    #[must_use]
    pub const fn new(nodes: u32) -> Self {
        Self { remaining: nodes }
    }

    /// Spends one node, returning whether one was available.
    pub const fn consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Returns `true` if no nodes remain.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Returns the number of nodes still available.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NODES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_to_exhaustion() {
        let mut budget = SearchBudget::new(3);
        assert_eq!(budget.remaining(), 3);
        assert!(!budget.is_exhausted());
        assert!(budget.consume());
        assert!(budget.consume());
        assert!(budget.consume());
        assert!(budget.is_exhausted());
        assert!(!budget.consume());
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn test_zero_budget_is_exhausted() {
        let mut budget = SearchBudget::new(0);
        assert!(budget.is_exhausted());
        assert!(!budget.consume());
    }

    #[test]
    fn test_default_cap() {
        let budget = SearchBudget::default();
        assert_eq!(budget.remaining(), SearchBudget::DEFAULT_NODES);
    }
}
