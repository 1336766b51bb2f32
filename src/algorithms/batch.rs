//! Many independent queries at once.
use crate::assembler::median;
use crate::divisibility::Divisible;
use crate::errors::{Result, SelectError};
use crate::schedulers::schedule;
use crate::strategies::KthSelect;
use crate::Policy;
use num_traits::AsPrimitive;

/// Queries and the slots receiving their answers.
struct Tasks<'a, Q, A> {
    queries: &'a [Q],
    answers: &'a mut [A],
}

impl<'a, Q: Sync, A: Send> Divisible for Tasks<'a, Q, A> {
    const LOG_TAG: &'static str = "queries";
    fn base_length(&self) -> usize {
        self.queries.len()
    }
    fn divide(self) -> (Self, Self) {
        let middle = self.queries.len() / 2;
        let (queries1, queries2) = self.queries.split_at(middle);
        let (answers1, answers2) = self.answers.split_at_mut(middle);
        (
            Tasks {
                queries: queries1,
                answers: answers1,
            },
            Tasks {
                queries: queries2,
                answers: answers2,
            },
        )
    }
}

/// Answer all queries with `answer`, reporting the first failure in input order.
fn run_all<Q, A, F>(queries: &[Q], policy: Policy, answer: F) -> Result<Vec<A>>
where
    Q: Sync,
    A: Send,
    F: Fn(&Q) -> Result<A> + Sync,
{
    let mut answers: Vec<Result<A>> = queries
        .iter()
        .map(|_| Err(SelectError::EmptyInput))
        .collect();
    let tasks = Tasks {
        queries,
        answers: answers.as_mut_slice(),
    };
    schedule(tasks, policy, &|tasks: Tasks<Q, Result<A>>| {
        tasks
            .queries
            .iter()
            .zip(tasks.answers.iter_mut())
            .for_each(|(q, a)| *a = answer(q))
    });
    answers.into_iter().collect()
}

/// `k`-th smallest element of `a` and `b` for each `k` of `ks`, in order.
///
/// # Example
///
/// ```
/// use rank_partition::{kth_batch, Policy, Strategy};
/// let a = [1, 5, 9];
/// let b = [2, 6];
/// let answers = kth_batch(&a, &b, &[5, 1, 3], Strategy::Partition, Policy::Sequential);
/// assert_eq!(answers, Ok(vec![9, 1, 5]));
/// ```
pub fn kth_batch<T, S>(a: &[T], b: &[T], ks: &[usize], strategy: S, policy: Policy) -> Result<Vec<T>>
where
    T: PartialOrd + Copy + Send + Sync,
    S: KthSelect + Sync,
{
    run_all(ks, policy, |&k| strategy.select(a, b, k))
}

/// Median of each pair of sorted slices.
pub fn medians<T>(pairs: &[(&[T], &[T])], policy: Policy) -> Result<Vec<f64>>
where
    T: PartialOrd + Copy + Send + Sync + AsPrimitive<f64>,
{
    run_all(pairs, policy, |&(a, b)| median(a, b))
}

