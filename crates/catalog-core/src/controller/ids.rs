//! Product id generation.
//!
//! Ids are wall-clock milliseconds, bumped past the last issued id so two
//! creates in the same millisecond (or a clock step backwards) never collide.

use crate::domain::ProductId;

pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// Wall clock (uses `Date.now()` under wasm32)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

impl<F: Fn() -> u64> Clock for F {
    fn now_millis(&self) -> u64 {
        self()
    }
}

pub struct IdGenerator {
    clock: Box<dyn Clock>,
    last: u64,
}

impl IdGenerator {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: 0,
        }
    }

    /// Record an id that already exists so it is never reissued
    pub fn observe(&mut self, id: ProductId) {
        self.last = self.last.max(id.get());
    }

    /// `None` once `u64::MAX` has been seen, since every later id would collide
    pub fn next_id(&mut self) -> Option<ProductId> {
        let next = self.clock.now_millis().max(self.last.checked_add(1)?);
        self.last = next;
        Some(ProductId::new(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_uses_clock_when_ahead() {
        let now = Rc::new(Cell::new(1_000_u64));
        let clock = {
            let now = now.clone();
            move || now.get()
        };
        let mut ids = IdGenerator::new(clock);

        assert_eq!(ids.next_id().unwrap().get(), 1_000);
        now.set(2_000);
        assert_eq!(ids.next_id().unwrap().get(), 2_000);
    }

    #[test]
    fn test_same_millisecond_stays_unique() {
        let mut ids = IdGenerator::new(|| 5_u64);
        let a = ids.next_id().unwrap();
        let b = ids.next_id().unwrap();
        let c = ids.next_id().unwrap();
        assert_eq!((a.get(), b.get(), c.get()), (5, 6, 7));
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let mut ids = IdGenerator::new(|| 10_u64);
        ids.observe(ProductId::new(50));
        ids.observe(ProductId::new(20));
        assert_eq!(ids.next_id().unwrap().get(), 51);
    }

    #[test]
    fn test_exhausted_after_max_id() {
        let mut ids = IdGenerator::new(|| 10_u64);
        ids.observe(ProductId::new(u64::MAX - 1));
        assert_eq!(ids.next_id(), Some(ProductId::new(u64::MAX)));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn test_system_clock_is_past_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
