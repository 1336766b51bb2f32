//! All schedulers are written here.
use crate::divisibility::Divisible;
use crate::Policy;

/// Run `work` on all of `input`, dividing according to given policy.
pub(crate) fn schedule<I, W>(input: I, policy: Policy, work: &W)
where
    I: Divisible,
    W: Fn(I) + Sync,
{
    match policy {
        Policy::Sequential => schedule_sequential(input, work),
        Policy::Join(sequential_fallback) => {
            schedule_join(input, work, sequential_fallback.max(1))
        }
        Policy::Rayon(sequential_fallback) => schedule_rayon(
            input,
            work,
            sequential_fallback.max(1),
            initial_depth(),
        ),
    }
}

fn initial_depth() -> usize {
    (rayon::current_num_threads() as f64).log(2.0).ceil() as usize
}

fn schedule_sequential<I, W>(input: I, work: &W)
where
    I: Divisible,
    W: Fn(I) + Sync,
{
    #[cfg(feature = "logs")]
    let size = input.base_length();
    #[cfg(feature = "logs")]
    rayon_logs::start_subgraph(I::LOG_TAG);
    work(input);
    #[cfg(feature = "logs")]
    rayon_logs::end_subgraph(I::LOG_TAG, size);
}

fn schedule_join<I, W>(input: I, work: &W, sequential_fallback: usize)
where
    I: Divisible,
    W: Fn(I) + Sync,
{
    if input.base_length() <= sequential_fallback {
        schedule_sequential(input, work)
    } else {
        let (left, right) = input.divide();
        rayon::join(
            || schedule_join(left, work, sequential_fallback),
            || schedule_join(right, work, sequential_fallback),
        );
    }
}

/// Mimic rayon's own splitting: only divide `counter` levels deep,
/// reset the counter when a task gets stolen.
fn schedule_rayon<I, W>(input: I, work: &W, sequential_fallback: usize, counter: usize)
where
    I: Divisible,
    W: Fn(I) + Sync,
{
    if input.base_length() <= sequential_fallback || counter == 0 {
        schedule_sequential(input, work)
    } else {
        let (left, right) = input.divide();
        rayon::join_context(
            |_| schedule_rayon(left, work, sequential_fallback, counter - 1),
            |c| {
                schedule_rayon(
                    right,
                    work,
                    sequential_fallback,
                    if c.migrated() {
                        initial_depth() + 1 // the +1 mimics rayon's current behaviour
                    } else {
                        counter - 1
                    },
                )
            },
        );
    }
}
