use crate::rng::SimRng;
use crate::simulation::deck::Deck;

/// Count the drawn positions that hold a land. Lands occupy the first
/// `deck.lands` positions of the deck.
pub fn count_lands(deck: Deck, positions: impl IntoIterator<Item = usize>) -> usize {
    positions
        .into_iter()
        .filter(|&position| position < deck.lands)
        .count()
}

/// Draw `hand_size` cards without replacement and return how many are lands.
///
/// Only the drawn positions are materialized, so the deck size does not
/// bound memory.
pub fn draw_lands(deck: Deck, hand_size: usize, rng: &mut SimRng) -> usize {
    count_lands(deck, rng.sample_indices(deck.size, hand_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lands() {
        let deck = Deck { size: 10, lands: 4 };
        assert_eq!(count_lands(deck, [0, 3, 4, 9]), 2);
        assert_eq!(count_lands(deck, []), 0);
    }

    #[test]
    fn test_draw_lands_bounded() {
        let deck = Deck { size: 10, lands: 4 };
        let mut rng = SimRng::new(Some(5));
        for _ in 0..500 {
            let lands = draw_lands(deck, 5, &mut rng);
            assert!(lands <= 4, "Cannot draw more lands than the deck holds");
        }
    }

    #[test]
    fn test_draw_forces_lands_when_few_spells() {
        // 2 non-lands, so a 5 card hand holds at least 3 lands
        let deck = Deck { size: 6, lands: 4 };
        let mut rng = SimRng::new(Some(11));
        for _ in 0..200 {
            let lands = draw_lands(deck, 5, &mut rng);
            assert!((3..=4).contains(&lands));
        }
    }

    #[test]
    fn test_draw_whole_deck() {
        let mut rng = SimRng::new(Some(9));
        assert_eq!(draw_lands(Deck { size: 7, lands: 3 }, 7, &mut rng), 3);
    }

    #[test]
    fn test_draw_empty_hand() {
        let mut rng = SimRng::new(Some(9));
        assert_eq!(draw_lands(Deck { size: 7, lands: 7 }, 0, &mut rng), 0);
    }

    #[test]
    fn test_draw_from_huge_deck() {
        let deck = Deck {
            size: 1 << 40,
            lands: 1 << 39,
        };
        let mut rng = SimRng::new(Some(2));
        for _ in 0..100 {
            assert!(draw_lands(deck, 7, &mut rng) <= 7);
        }
    }
}
