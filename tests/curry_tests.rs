//! Unit tests for the runtime curry engine.
//!
//! A chain built by `curry(function, count)` collects `count` arguments one
//! at a time and invokes the callable on the final call, with the arguments
//! in application order.

#![cfg(feature = "runtime")]

use curryfn::apply::{Dispatched, VariadicFunction, curry};

fn gather(arguments: Vec<i32>) -> Vec<i32> {
    arguments
}

// =============================================================================
// Base case
// =============================================================================

mod base_case_tests {
    use super::*;

    #[test]
    fn test_zero_count_behaves_like_the_function_itself() {
        let chain = curry(VariadicFunction::new(gather), 0);
        assert!(chain.is_saturated());
        assert_eq!(chain.call(vec![1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(chain.call(vec![]), Vec::<i32>::new());
    }

    #[test]
    fn test_zero_count_unwraps_to_the_original_function() {
        let chain = curry(VariadicFunction::new(gather), 0);
        let function = chain.into_function();
        assert_eq!(function.call(vec![7]), vec![7]);
    }
}

// =============================================================================
// Argument collection
// =============================================================================

mod collection_tests {
    use super::*;

    #[test]
    fn test_two_steps_then_a_final_call() {
        // curry(f, 2)(1)(2)(3) == f(1, 2, 3)
        let chain = curry(VariadicFunction::new(gather), 2);
        assert_eq!(chain.apply(1).apply(2).call(vec![3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_the_final_call_may_carry_several_arguments() {
        let chain = curry(VariadicFunction::new(gather), 1);
        assert_eq!(chain.apply(1).call(vec![2, 3, 4]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_the_final_call_may_carry_none() {
        let chain = curry(VariadicFunction::new(gather), 2);
        assert_eq!(chain.apply(1).apply(2).call(vec![]), vec![1, 2]);
    }

    #[test]
    fn test_arguments_arrive_in_application_order() {
        let chain = curry(VariadicFunction::new(gather), 3);
        assert_eq!(
            chain.apply(3).apply(1).apply(2).call(vec![0]),
            vec![3, 1, 2, 0]
        );
    }

    #[test]
    fn test_remaining_counts_down_per_application() {
        let chain = curry(VariadicFunction::new(gather), 2);
        assert_eq!(chain.remaining(), 2);
        let once = chain.apply(1);
        assert_eq!(once.remaining(), 1);
        let twice = once.apply(2);
        assert_eq!(twice.remaining(), 0);
        assert!(twice.is_saturated());
    }
}

// =============================================================================
// Reuse and independence
// =============================================================================

mod reuse_tests {
    use super::*;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    #[test]
    fn test_a_stage_can_be_called_many_times() {
        let add_five = curry(VariadicFunction::from_fn2(add), 1).apply(5);
        assert_eq!(add_five.call(vec![3]), 8);
        assert_eq!(add_five.call(vec![10]), 15);
        assert_eq!(add_five.call(vec![-5]), 0);
    }

    #[test]
    fn test_branches_from_one_stage_are_independent() {
        let chain = curry(VariadicFunction::from_fn2(add), 1);
        let double_base = chain.apply(2);
        let triple_base = chain.apply(3);
        assert_eq!(double_base.call(vec![5]), 7);
        assert_eq!(triple_base.call(vec![5]), 8);
        assert_eq!(double_base.call(vec![5]), 7);
    }

    #[test]
    fn test_chains_work_with_non_copy_arguments() {
        fn join(arguments: Vec<String>) -> String {
            arguments.join("-")
        }

        let chain = curry(VariadicFunction::new(join), 2);
        let first = chain.apply("a".to_string());
        let second = first.apply("b".to_string());
        assert_eq!(second.call(vec!["c".to_string()]), "a-b-c");
        assert_eq!(second.call(vec!["d".to_string()]), "a-b-d");
    }
}

// =============================================================================
// Group application
// =============================================================================

mod supply_tests {
    use super::*;

    #[test]
    fn test_supply_applies_then_invokes() {
        let chain = curry(VariadicFunction::new(gather), 2);
        match chain.supply(vec![1, 2, 3]) {
            Dispatched::Value(result) => assert_eq!(result, vec![1, 2, 3]),
            Dispatched::Function(_) => unreachable!("three arguments saturate two steps"),
        }
    }

    #[test]
    fn test_supply_can_stop_partway() {
        let chain = curry(VariadicFunction::new(gather), 3);
        let stage = chain.supply(vec![1]).into_function().unwrap();
        assert_eq!(stage.remaining(), 2);
        let finished = stage.supply(vec![2, 3, 4]).into_value().unwrap();
        assert_eq!(finished, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_supplying_nothing_changes_nothing() {
        let chain = curry(VariadicFunction::new(gather), 2);
        let stage = chain.supply(vec![]).into_function().unwrap();
        assert_eq!(stage.remaining(), 2);
    }
}

// =============================================================================
// Contract violations
// =============================================================================

mod contract_tests {
    use super::*;

    #[test]
    #[should_panic(expected = "already saturated")]
    fn test_applying_a_saturated_chain_panics() {
        let chain = curry(VariadicFunction::new(gather), 1);
        let _ = chain.apply(1).apply(2);
    }

    #[test]
    #[should_panic(expected = "still expects 1 unary application(s)")]
    fn test_calling_an_unsaturated_chain_panics() {
        let chain = curry(VariadicFunction::new(gather), 1);
        let _ = chain.call(vec![1]);
    }
}
