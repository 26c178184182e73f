use rand::Rng;
use rand::seq::SliceRandom;

/// Uniformly select `min(k, len)` distinct items, in arbitrary order.
pub fn sample<T: Clone>(items: Vec<T>, k: usize) -> Vec<T> {
    sample_with_rng(items, k, &mut rand::thread_rng())
}

/// [`sample`] with a caller-supplied random source.
///
/// Partial Fisher–Yates: every item has the same chance of selection and no
/// position is drawn twice.
pub fn sample_with_rng<T, R>(mut items: Vec<T>, k: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let amount = k.min(items.len());
    let (selected, _) = items.partial_shuffle(rng, amount);
    selected.to_vec()
}
