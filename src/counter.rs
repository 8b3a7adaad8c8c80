use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out increasing ids, starting at 0.
///
/// Owned by whoever needs unique ids and shared by reference; there is no
/// reset and no way to read the value without consuming an id.
#[derive(Debug, Default)]
pub struct IdCounter {
    next: AtomicU64,
}

impl IdCounter {
    pub fn new() -> Self {
        IdCounter {
            next: AtomicU64::new(0),
        }
    }

    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_at_zero_and_increments() {
        let counter = IdCounter::new();
        assert_eq!(counter.next(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
    }

    #[test]
    fn test_counters_are_independent() {
        let a = IdCounter::new();
        let b = IdCounter::default();
        a.next();
        a.next();
        assert_eq!(b.next(), 0);
        assert_eq!(a.next(), 2);
    }

    #[test]
    fn test_concurrent_ids_are_unique() {
        let counter = Arc::new(IdCounter::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || (0..250).map(|_| counter.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(seen.len(), 1000);
        assert_eq!(counter.next(), 1000);
    }
}
