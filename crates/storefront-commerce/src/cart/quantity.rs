//! Per-line quantity counter.
//!
//! Local to one rendered cart line. The cart manager tracks membership only
//! and never reads this value.

/// Displayed quantity of a cart line, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineQuantity(u32);

impl LineQuantity {
    /// Quantity shown when a line is first displayed.
    pub const INITIAL: u32 = 1;

    /// Create a counter at [`Self::INITIAL`].
    pub fn new() -> Self {
        Self(Self::INITIAL)
    }

    /// Current count.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Add one. Saturates instead of wrapping.
    pub fn increment(&mut self) -> u32 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    /// Subtract one, never going below zero.
    pub fn decrement(&mut self) -> u32 {
        self.0 = self.0.saturating_sub(1);
        self.0
    }
}

impl Default for LineQuantity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        assert_eq!(LineQuantity::new().get(), 1);
        assert_eq!(LineQuantity::default(), LineQuantity::new());
    }

    #[test]
    fn test_increment_counts_up() {
        let mut qty = LineQuantity::new();
        assert_eq!(qty.increment(), 2);
        assert_eq!(qty.increment(), 3);
        assert_eq!(qty.increment(), 4);
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut qty = LineQuantity::new();
        let seen: Vec<u32> = (0..5).map(|_| qty.decrement()).collect();
        assert_eq!(seen, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_increment_after_zero() {
        let mut qty = LineQuantity::new();
        qty.decrement();
        qty.decrement();
        assert_eq!(qty.increment(), 1);
    }

    #[test]
    fn test_increment_saturates() {
        let mut qty = LineQuantity(u32::MAX);
        assert_eq!(qty.increment(), u32::MAX);
    }
}
