//! Session-scoped game-over latch

/// Set once when an enemy reaches the player; only a new session clears it.
///
/// Every component may read it. The only writer is [`EnemyWave`] on a player
/// collision, which is why [`GameOverFlag::latch`] is crate-private.
///
/// [`EnemyWave`]: super::enemies::EnemyWave
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameOverFlag {
    latched_at: Option<u64>,
}

impl GameOverFlag {
    pub fn new() -> Self {
        Self { latched_at: None }
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.latched_at.is_some()
    }

    /// Session frame count when the latch closed
    pub fn latched_at(&self) -> Option<u64> {
        self.latched_at
    }

    /// Close the latch at `frame`. Returns true only on the first call.
    pub(crate) fn latch(&mut self, frame: u64) -> bool {
        if self.latched_at.is_some() {
            return false;
        }
        self.latched_at = Some(frame);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_clear() {
        let flag = GameOverFlag::new();
        assert!(!flag.is_set());
        assert_eq!(flag.latched_at(), None);
    }

    #[test]
    fn test_latch_once() {
        let mut flag = GameOverFlag::new();
        assert!(flag.latch(120));
        assert!(flag.is_set());
        assert!(!flag.latch(200));
        assert_eq!(flag.latched_at(), Some(120));
    }

    proptest! {
        #[test]
        fn prop_latch_is_monotonic(frames in proptest::collection::vec(any::<u64>(), 1..32)) {
            let mut flag = GameOverFlag::new();
            let first = frames[0];
            for frame in frames {
                flag.latch(frame);
                prop_assert!(flag.is_set());
            }
            prop_assert_eq!(flag.latched_at(), Some(first));
        }
    }
}
