use super::card::BingoCard;

/// A player and the one card dealt to them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// 1-based, matches the card id
    pub id: usize,
    pub name: Option<String>,
    pub card: BingoCard,
}

impl Participant {
    pub fn new(id: usize, name: Option<String>, card: BingoCard) -> Self {
        Self { id, name, card }
    }

    /// Supplied name, or a `Player N` placeholder
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Player {}", self.id))
    }

    /// Heading printed on the card
    pub fn card_label(&self) -> String {
        match &self.name {
            Some(name) => format!("Card {}: {}", self.card.id, name),
            None => format!("Card {}", self.card.id),
        }
    }
}
