use proptest::collection::vec;
use proptest::prelude::*;
use rank_partition::prelude::*;
use rank_partition::{
    kth_smallest, median, median_with, merge, partition_search, Elimination, PartitionSearch,
    Policy,
};

fn sorted(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    vec(-1_000i32..1_000, 0..max_len).prop_map(|mut v| {
        v.sort();
        v
    })
}

fn merged(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut all: Vec<i32> = a.iter().chain(b).cloned().collect();
    all.sort();
    all
}

proptest! {
    #[test]
    fn median_matches_sorted_concatenation(a in sorted(60), b in sorted(60)) {
        prop_assume!(!a.is_empty() || !b.is_empty());
        let all = merged(&a, &b);
        let n = all.len();
        let expected = if n % 2 == 1 {
            f64::from(all[n / 2])
        } else {
            (f64::from(all[n / 2 - 1]) + f64::from(all[n / 2])) / 2.0
        };
        prop_assert_eq!(median(&a, &b), Ok(expected));
        prop_assert_eq!(median(&b, &a), Ok(expected));
        prop_assert_eq!(median_with(Elimination, &a, &b), Ok(expected));
    }

    #[test]
    fn kth_matches_sorted_concatenation(a in sorted(40), b in sorted(40), seed in 0usize..1_000) {
        prop_assume!(!a.is_empty() || !b.is_empty());
        let all = merged(&a, &b);
        let k = seed % all.len() + 1;
        prop_assert_eq!(kth_smallest(&a, &b, k), Ok(all[k - 1]));
        prop_assert_eq!(Elimination.select(&a, &b, k), Ok(all[k - 1]));
        prop_assert_eq!(PartitionSearch.select(&b, &a, k), Ok(all[k - 1]));
    }

    #[test]
    fn median_partition_is_balanced(a in sorted(80), b in sorted(80)) {
        prop_assume!(!a.is_empty() || !b.is_empty());
        let required = (a.len() + b.len() + 1) / 2;
        let p = partition_search(&a, &b, required).unwrap();
        prop_assert_eq!(p.left_a + p.left_b, required);
        prop_assert!(p.max_left <= p.min_right);
        let shortest = a.len().min(b.len());
        let bound = (0..).find(|&e| (1usize << e) >= shortest + 1).unwrap();
        prop_assert!(p.narrowings <= bound);
    }

    #[test]
    fn merge_matches_sort(a in sorted(200), b in sorted(200), block in 1usize..50) {
        prop_assert_eq!(merge(&a, &b, Policy::Join(block)), merged(&a, &b));
    }
}
