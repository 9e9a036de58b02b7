//! Bounded polling wait primitive
//!
//! Every wait point in a transaction is a tight poll of one status flag
//! with a fixed countdown budget. There is no interrupt or asynchronous
//! completion path: budget exhaustion is the engine's only failure
//! detection. The spin never yields, so it needs no allocator and no
//! scheduler.

/// Countdown budget for simple flag waits
pub const SHORT_BUDGET: u32 = 0x1000;

/// Countdown budget for composite waits (bus-free, stop detection)
pub const LONG_BUDGET: u32 = 10 * SHORT_BUDGET;

/// Poll `ready` until it holds or the countdown is exhausted
///
/// Returns `true` the instant the predicate holds. The countdown starts
/// at `budget` and is decremented on each failed poll; once it reaches
/// zero the wait gives up and returns `false`. The predicate is therefore
/// consulted at most `budget + 1` times.
pub fn poll_until(mut ready: impl FnMut() -> bool, budget: u32) -> bool {
    let mut remaining = budget;
    loop {
        if ready() {
            return true;
        }
        if remaining == 0 {
            return false;
        }
        remaining -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_success() {
        assert!(poll_until(|| true, 0));
    }

    #[test]
    fn test_success_mid_budget() {
        let mut polls = 0u32;
        let ok = poll_until(
            || {
                polls += 1;
                polls == 5
            },
            100,
        );
        assert!(ok);
        assert_eq!(polls, 5);
    }

    #[test]
    fn test_exhaustion() {
        let mut polls = 0u32;
        let ok = poll_until(
            || {
                polls += 1;
                false
            },
            37,
        );
        assert!(!ok);
        // Countdown decrements on failed polls only
        assert_eq!(polls, 38);
    }

    #[test]
    fn test_zero_budget_polls_once() {
        let mut polls = 0u32;
        assert!(!poll_until(
            || {
                polls += 1;
                false
            },
            0,
        ));
        assert_eq!(polls, 1);
    }

    #[test]
    fn test_budget_constants() {
        assert_eq!(SHORT_BUDGET, 0x1000);
        assert_eq!(LONG_BUDGET, 10 * SHORT_BUDGET);
    }
}
