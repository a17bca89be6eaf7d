//! The roulette wheel: a single active policy behind `spin`.

use std::fmt;

use lucky_deuce_core::policy::SpinPolicy;
use lucky_deuce_core::rng::EntropySource;

use super::policies::HonestPolicy;

/// Holds exactly one active policy and delegates every spin to it.
///
/// Not internally synchronized. Owners with more than one caller should wrap
/// the wheel in a `Mutex` and hold the lock for the whole `spin` or
/// `set_policy` call.
pub struct Roulette {
    policy: Box<dyn SpinPolicy>,
}

impl Roulette {
    /// Creates a wheel running a fresh `HonestPolicy` over `entropy`.
    #[must_use]
    pub fn new(entropy: Box<dyn EntropySource>) -> Self {
        Self::with_policy(Box::new(HonestPolicy::new(entropy)))
    }

    /// Creates a wheel running the given policy.
    #[must_use]
    pub fn with_policy(policy: Box<dyn SpinPolicy>) -> Self {
        Self { policy }
    }

    /// Produces the next pocket from the active policy.
    pub fn spin(&mut self) -> u32 {
        self.policy.next_number()
    }

    /// Replaces the active policy. The previous policy and all of its state
    /// are dropped.
    pub fn set_policy(&mut self, policy: Box<dyn SpinPolicy>) {
        self.policy = policy;
    }
}

impl fmt::Debug for Roulette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Roulette").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policies::{PolicyKind, PredictablePolicy};
    use lucky_deuce_test_support::{RecordingPolicy, SequenceRng};

    #[test]
    fn test_new_wheel_runs_honest_policy() {
        let mut roulette = Roulette::new(Box::new(SequenceRng::new(vec![1, 1, 1, 2])));

        let outputs: Vec<u32> = (0..3).map(|_| roulette.spin()).collect();

        assert_eq!(outputs, vec![1, 1, 2]);
    }

    #[test]
    fn test_spin_delegates_exactly_once_per_call() {
        let policy = RecordingPolicy::new(17);
        let counter = policy.counter();
        let mut roulette = Roulette::with_policy(Box::new(policy));

        assert_eq!(counter.count(), 0);
        assert_eq!(roulette.spin(), 17);
        assert_eq!(counter.count(), 1);
        roulette.spin();
        roulette.spin();
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn test_set_policy_routes_spins_to_new_policy() {
        let old = RecordingPolicy::new(3);
        let old_counter = old.counter();
        let new = RecordingPolicy::new(30);
        let new_counter = new.counter();
        let mut roulette = Roulette::with_policy(Box::new(old));

        roulette.spin();
        roulette.set_policy(Box::new(new));

        assert_eq!(roulette.spin(), 30);
        assert_eq!(old_counter.count(), 1);
        assert_eq!(new_counter.count(), 1);
    }

    #[test]
    fn test_swapping_in_fresh_policy_discards_previous_history() {
        let mut roulette =
            Roulette::with_policy(Box::new(PredictablePolicy::from_seed_terms(5, 7)));
        assert_eq!(roulette.spin(), 11);
        assert_eq!(roulette.spin(), 16);

        // If 11 were still remembered, the first output would be nudged to 12.
        roulette.set_policy(Box::new(PredictablePolicy::from_seed_terms(5, 7)));
        assert_eq!(roulette.spin(), 11);
    }

    #[test]
    fn test_swap_from_predictable_to_honest_isolates_state() {
        let mut roulette =
            Roulette::with_policy(Box::new(PredictablePolicy::from_seed_terms(0, 0)));
        roulette.spin();
        roulette.spin();

        let honest = SequenceRng::new(vec![13, 13, 13, 14]);
        roulette.set_policy(PolicyKind::Honest.build(Box::new(honest)));

        let outputs: Vec<u32> = (0..3).map(|_| roulette.spin()).collect();
        assert_eq!(outputs, vec![13, 13, 14]);
    }
}
