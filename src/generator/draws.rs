//! Draw sequence planning
//!
//! Picks the order in which numbers are called so that a chosen set of
//! cards is certain to complete a line by the final draw.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use super::cards::sample_values;
use crate::error::ConfigError;
use crate::model::{span_len, BingoCard, Line, Participant};

/// Ordered calls for a game plus the cards that are certain to win
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawPlan {
    /// Numbers in the order they should be called
    pub numbers: Vec<u32>,
    /// Card ids guaranteed to hold a line after the last draw, ascending
    pub guaranteed: Vec<usize>,
}

impl DrawPlan {
    /// Numbers called in the first `count` draws
    pub fn drawn_after(&self, count: usize) -> HashSet<u32> {
        self.numbers.iter().take(count).copied().collect()
    }

    /// Card ids holding a line after the first `count` draws
    pub fn winners_after(&self, participants: &[Participant], count: usize) -> Vec<usize> {
        let drawn = self.drawn_after(count);
        participants
            .iter()
            .filter(|p| p.card.has_line(&drawn))
            .map(|p| p.card.id)
            .collect()
    }

    /// Card ids holding a line once every number is called
    pub fn winners(&self, participants: &[Participant]) -> Vec<usize> {
        self.winners_after(participants, self.numbers.len())
    }

    /// 1-based draw at which `card` first completes a line.
    ///
    /// `Some(0)` means the card holds a line before any draw, as a 1x1 card
    /// made only of the free cell does.
    pub fn first_line_at(&self, card: &BingoCard) -> Option<usize> {
        let mut drawn = HashSet::with_capacity(self.numbers.len());
        if card.has_line(&drawn) {
            return Some(0);
        }
        for (i, n) in self.numbers.iter().enumerate() {
            drawn.insert(*n);
            if card.contains(*n) && card.has_line(&drawn) {
                return Some(i + 1);
            }
        }
        None
    }
}

/// Plan `draws` calls from `number_range` guaranteeing `winners` winning cards.
///
/// Each guaranteed card is given the line costing the fewest numbers not
/// already required by earlier picks, ties broken at random. The rest of the
/// sequence is filled with distinct random numbers and the whole sequence
/// shuffled.
pub fn plan_draws<R: Rng + ?Sized>(
    participants: &[Participant],
    winners: usize,
    draws: usize,
    number_range: &RangeInclusive<u32>,
    rng: &mut R,
) -> Result<DrawPlan, ConfigError> {
    if winners > participants.len() {
        return Err(ConfigError::TooManyWinners {
            winners,
            players: participants.len(),
        });
    }
    if draws == 0 {
        return Err(ConfigError::NoDraws);
    }
    let available = span_len(number_range);
    if draws > available {
        return Err(ConfigError::DrawsExceedRange { draws, available });
    }

    let mut required: Vec<u32> = Vec::new();
    let mut required_set: HashSet<u32> = HashSet::new();
    let mut guaranteed: Vec<usize> = Vec::with_capacity(winners);

    for participant in participants.choose_multiple(rng, winners) {
        let card = &participant.card;
        let line = cheapest_line(card, &required_set, rng);
        for n in card.line_cells(line).iter().filter_map(|c| c.number()) {
            if required_set.insert(n) {
                required.push(n);
            }
        }
        log::debug!("Card {} will win on {:?}", card.id, line);
        guaranteed.push(card.id);
    }
    guaranteed.sort_unstable();

    if required.len() > draws {
        return Err(ConfigError::TooFewDraws {
            needed: required.len(),
            draws,
        });
    }

    // A random sample of `draws` values holds at most `required.len()`
    // required ones, so enough filler always survives the filter.
    let filler_needed = draws - required.len();
    let filler: Vec<u32> = sample_values(rng, *number_range.start(), available, draws)
        .into_iter()
        .filter(|n| !required_set.contains(n))
        .take(filler_needed)
        .collect();

    let mut numbers = required;
    numbers.extend(filler);
    numbers.shuffle(rng);

    log::info!(
        "Planned {} draws guaranteeing {} winners",
        numbers.len(),
        guaranteed.len()
    );

    Ok(DrawPlan {
        numbers,
        guaranteed,
    })
}

/// A line needing the fewest numbers beyond those already required
fn cheapest_line<R: Rng + ?Sized>(
    card: &BingoCard,
    required: &HashSet<u32>,
    rng: &mut R,
) -> Line {
    let cost = |line: Line| {
        card.line_cells(line)
            .iter()
            .filter_map(|c| c.number())
            .filter(|n| !required.contains(n))
            .count()
    };

    let lines = card.lines();
    let best = lines.iter().map(|l| cost(*l)).min().unwrap_or(0);
    let candidates: Vec<Line> = lines.into_iter().filter(|l| cost(*l) == best).collect();
    candidates.choose(rng).copied().unwrap_or(Line::Row(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::deal_participants;
    use crate::model::CardLayout;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn deck(count: usize, seed: u64) -> Vec<Participant> {
        let mut rng = StdRng::seed_from_u64(seed);
        deal_participants(count, &[], &CardLayout::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_guaranteed_cards_win() {
        let players = deck(12, 5);
        let mut rng = StdRng::seed_from_u64(11);
        let plan = plan_draws(&players, 3, 30, &(1..=75), &mut rng).unwrap();

        assert_eq!(plan.numbers.len(), 30);
        assert_eq!(plan.guaranteed.len(), 3);

        let winners = plan.winners(&players);
        for id in &plan.guaranteed {
            assert!(winners.contains(id), "card {} should win", id);
        }
    }

    #[test]
    fn test_draws_are_distinct_and_in_range() {
        let players = deck(4, 2);
        let mut rng = StdRng::seed_from_u64(2);
        let plan = plan_draws(&players, 2, 40, &(1..=75), &mut rng).unwrap();

        let unique: HashSet<u32> = plan.numbers.iter().copied().collect();
        assert_eq!(unique.len(), 40);
        assert!(plan.numbers.iter().all(|n| (1..=75u32).contains(n)));
    }

    #[test]
    fn test_single_winner_needs_four_draws() {
        // The cheapest line on a 5x5 card runs through the free cell.
        let players = deck(3, 9);
        let mut rng = StdRng::seed_from_u64(9);

        assert_eq!(
            plan_draws(&players, 1, 3, &(1..=75), &mut rng),
            Err(ConfigError::TooFewDraws { needed: 4, draws: 3 })
        );

        let plan = plan_draws(&players, 1, 4, &(1..=75), &mut rng).unwrap();
        let winner = players
            .iter()
            .find(|p| p.card.id == plan.guaranteed[0])
            .unwrap();
        assert_eq!(plan.first_line_at(&winner.card), Some(4));
    }

    #[test]
    fn test_no_winners_is_allowed() {
        let players = deck(2, 4);
        let mut rng = StdRng::seed_from_u64(4);
        let plan = plan_draws(&players, 0, 10, &(1..=75), &mut rng).unwrap();
        assert!(plan.guaranteed.is_empty());
        assert_eq!(plan.numbers.len(), 10);
    }

    #[test]
    fn test_invalid_requests() {
        let players = deck(2, 4);
        let mut rng = StdRng::seed_from_u64(4);

        assert_eq!(
            plan_draws(&players, 3, 10, &(1..=75), &mut rng),
            Err(ConfigError::TooManyWinners {
                winners: 3,
                players: 2
            })
        );
        assert_eq!(
            plan_draws(&players, 1, 0, &(1..=75), &mut rng),
            Err(ConfigError::NoDraws)
        );
        assert_eq!(
            plan_draws(&players, 1, 80, &(1..=75), &mut rng),
            Err(ConfigError::DrawsExceedRange {
                draws: 80,
                available: 75
            })
        );
    }

    #[test]
    fn test_plan_from_full_u32_range() {
        let layout = CardLayout::new(5, 1..=u32::MAX);
        let mut rng = StdRng::seed_from_u64(21);
        let players = deal_participants(3, &[], &layout, &mut rng).unwrap();

        let plan = plan_draws(&players, 2, 12, &layout.number_range, &mut rng).unwrap();
        assert_eq!(plan.numbers.len(), 12);
        let unique: HashSet<u32> = plan.numbers.iter().copied().collect();
        assert_eq!(unique.len(), 12);
        assert!(plan.numbers.iter().all(|n| *n >= 1));

        let winners = plan.winners(&players);
        for id in &plan.guaranteed {
            assert!(winners.contains(id));
        }
    }

    #[test]
    fn test_free_only_card_wins_before_any_draw() {
        let layout = CardLayout::new(1, 1..=5);
        let mut rng = StdRng::seed_from_u64(8);
        let players = deal_participants(1, &[], &layout, &mut rng).unwrap();
        let plan = plan_draws(&players, 1, 3, &layout.number_range, &mut rng).unwrap();
        assert_eq!(plan.first_line_at(&players[0].card), Some(0));
    }

    #[test]
    fn test_drawn_after_prefix() {
        let plan = DrawPlan {
            numbers: vec![5, 9, 12],
            guaranteed: vec![],
        };
        let drawn = plan.drawn_after(2);
        assert!(drawn.contains(&5) && drawn.contains(&9));
        assert!(!drawn.contains(&12));
    }
}
