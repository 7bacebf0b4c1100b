#[cfg(test)]
mod tests {
    use crate::core::counter::{CounterState, INITIAL_COUNT};
    use tracing_test::traced_test;

    #[test]
    fn test_create() {
        let counter = CounterState::create();
        assert_eq!(counter.current_count(), 3);
        assert_eq!(counter.current_count(), INITIAL_COUNT);
        assert_eq!(counter.observer_count(), 0);
    }

    #[test]
    fn test_default_matches_create() {
        assert_eq!(CounterState::default().current_count(), INITIAL_COUNT);
    }

    #[test]
    fn test_increment() {
        let mut counter = CounterState::create();
        counter.increment_count();
        assert_eq!(counter.current_count(), 4);

        counter.increment_count();
        assert_eq!(counter.current_count(), 5);
    }

    #[test]
    fn test_n_increments() {
        for n in [0u64, 1, 7, 100] {
            let mut counter = CounterState::create();
            for _ in 0..n {
                counter.increment_count();
            }
            assert_eq!(counter.current_count(), INITIAL_COUNT + n);
        }
    }

    #[test]
    fn test_counters_are_independent() {
        let mut first = CounterState::create();
        let second = CounterState::create();

        first.increment_count();
        first.increment_count();

        assert_eq!(first.current_count(), 5);
        assert_eq!(second.current_count(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = CounterState::create();
        original.increment_count();

        let mut copy = original.clone();
        copy.increment_count();
        copy.increment_count();

        assert_eq!(original.current_count(), 4);
        assert_eq!(copy.current_count(), 6);
    }

    #[test]
    #[traced_test]
    fn test_increment_is_logged() {
        let mut counter = CounterState::create();
        counter.increment_count();

        assert!(logs_contain("Creating a new counter with initial value: 3"));
        assert!(logs_contain("Counter incremented to: 4"));
    }
}
