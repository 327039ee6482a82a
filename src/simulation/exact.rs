use crate::simulation::deck::Deck;

/// Natural log of the binomial coefficient C(n, k)
fn ln_choose(n: usize, k: usize) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    (0..k)
        .map(|i| ((n - i) as f64).ln() - ((i + 1) as f64).ln())
        .sum()
}

/// Hypergeometric probability of each lands-in-hand outcome `0..=hand_size`.
///
/// Outcomes that cannot occur (more lands than the deck has, or fewer than
/// the non-lands force) get probability 0.
pub fn hypergeometric(deck: Deck, hand_size: usize) -> Vec<f64> {
    let total = ln_choose(deck.size, hand_size);
    (0..=hand_size)
        .map(|k| {
            if k > deck.lands || hand_size - k > deck.non_lands() {
                return 0.0;
            }
            (ln_choose(deck.lands, k) + ln_choose(deck.non_lands(), hand_size - k) - total).exp()
        })
        .collect()
}
