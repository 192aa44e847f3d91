//! Dealing one card to each participant

use std::collections::HashSet;

use rand::Rng;

use super::cards::draw_card;
use crate::error::ConfigError;
use crate::model::{CardLayout, Cell, Participant};

/// Generation attempts allowed per requested card when looking for distinct cards
pub const UNIQUE_ATTEMPTS_PER_CARD: usize = 100;

/// Deal a card to each of `participant_count` participants.
///
/// Names are assigned in order and may be fewer than the participants; the
/// rest stay unnamed. Cards are kept distinct across the deck while the
/// attempt budget lasts, after which duplicates are accepted so that every
/// participant still receives a card.
pub fn deal_participants<R: Rng + ?Sized>(
    participant_count: usize,
    names: &[String],
    layout: &CardLayout,
    rng: &mut R,
) -> Result<Vec<Participant>, ConfigError> {
    if participant_count == 0 {
        return Err(ConfigError::NoParticipants);
    }
    if names.len() > participant_count {
        return Err(ConfigError::TooManyNames {
            names: names.len(),
            participants: participant_count,
        });
    }
    layout.validate()?;

    if !names.is_empty() && names.len() < participant_count {
        log::warn!(
            "Only {} names for {} participants; the rest get placeholders",
            names.len(),
            participant_count
        );
    }

    let mut budget = UniqueBudget::new(participant_count * UNIQUE_ATTEMPTS_PER_CARD);
    let mut seen: HashSet<Vec<Vec<Cell>>> = HashSet::with_capacity(participant_count);
    let mut participants = Vec::with_capacity(participant_count);

    while participants.len() < participant_count {
        let id = participants.len() + 1;
        let card = draw_card(id, layout, rng);

        match budget.judge(seen.insert(card.rows().to_vec())) {
            Verdict::Retry => continue,
            Verdict::KeepDuplicate { first: true } => log::warn!(
                "Only {} unique cards found after {} attempts; remaining cards may repeat",
                participants.len(),
                budget.attempts
            ),
            Verdict::Keep | Verdict::KeepDuplicate { first: false } => {}
        }

        let name = names.get(id - 1).cloned();
        participants.push(Participant::new(id, name, card));
    }

    log::info!(
        "Dealt {} cards in {} attempts ({} repeated)",
        participants.len(),
        budget.attempts,
        budget.duplicates
    );
    Ok(participants)
}

/// What to do with a freshly drawn card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Keep,
    Retry,
    /// Budget spent; `first` marks the first repeat accepted
    KeepDuplicate { first: bool },
}

/// Attempt accounting while looking for distinct cards
#[derive(Debug)]
struct UniqueBudget {
    max_attempts: usize,
    attempts: usize,
    duplicates: usize,
}

impl UniqueBudget {
    fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            attempts: 0,
            duplicates: 0,
        }
    }

    fn judge(&mut self, fresh: bool) -> Verdict {
        self.attempts += 1;
        if fresh {
            return Verdict::Keep;
        }
        if self.attempts < self.max_attempts {
            return Verdict::Retry;
        }
        self.duplicates += 1;
        Verdict::KeepDuplicate {
            first: self.duplicates == 1,
        }
    }
}
