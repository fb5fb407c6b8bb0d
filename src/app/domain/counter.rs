/// The page counter: a single non-negative integer owned by the component
/// that displays it, so independent instances never interfere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self { value: 0 }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Add one and return the new value. There is no upper bound.
    pub fn increment(&mut self) -> u64 {
        self.value += 1;
        self.value
    }

    /// Subtract one unless already at the floor of 0.
    ///
    /// Returns `Some(new_value)` when the value changed, `None` when it was
    /// already 0. Callers only refresh the display on `Some`, so a decrement
    /// at the floor leaves both the value and the display untouched.
    pub fn decrement(&mut self) -> Option<u64> {
        if self.value > 0 {
            self.value -= 1;
            Some(self.value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Counter::new().value(), 0);
        assert_eq!(Counter::default().value(), 0);
    }

    #[test]
    fn test_increment_adds_one() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn test_decrement_at_floor_is_a_no_op() {
        let mut counter = Counter::new();
        assert_eq!(counter.decrement(), None);
        assert_eq!(counter.decrement(), None);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_decrement_above_floor() {
        let mut counter = Counter::new();
        counter.increment();
        counter.increment();
        assert_eq!(counter.decrement(), Some(1));
        assert_eq!(counter.decrement(), Some(0));
        assert_eq!(counter.decrement(), None);
    }

    #[test]
    fn test_interleaved_operations_never_go_negative() {
        let mut counter = Counter::new();
        for _ in 0..3 {
            counter.decrement();
        }
        counter.increment();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value(), 0);
    }
}
