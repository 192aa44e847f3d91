use crate::cli::{parse_number_range, Args};
use crate::error::ConfigError;
use crate::model::CardLayout;

/// Generation parameters for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub participants: usize,
    /// Rounds, i.e. numbers called
    pub draws: usize,
    pub winners: usize,
    pub names: Vec<String>,
    pub layout: CardLayout,
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn new(participants: usize, draws: usize, winners: usize) -> Self {
        Self {
            participants,
            draws,
            winners,
            names: Vec::new(),
            layout: CardLayout::default(),
            seed: None,
        }
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn with_layout(mut self, layout: CardLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build from CLI arguments and check it
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let number_range =
            parse_number_range(&args.numbers).map_err(ConfigError::InvalidNumberRange)?;
        let mut layout = CardLayout::new(args.grid_size as usize, number_range);
        layout.banded = !args.unbanded;

        let config = Self::new(args.players, args.draws, args.winners)
            .with_names(args.name_list())
            .with_layout(layout)
            .with_seed(args.seed);
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a deck and a draw plan
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.participants == 0 {
            return Err(ConfigError::NoParticipants);
        }
        if self.names.len() > self.participants {
            return Err(ConfigError::TooManyNames {
                names: self.names.len(),
                participants: self.participants,
            });
        }
        if self.winners > self.participants {
            return Err(ConfigError::TooManyWinners {
                winners: self.winners,
                players: self.participants,
            });
        }
        if self.draws == 0 {
            return Err(ConfigError::NoDraws);
        }
        self.layout.validate()?;

        let available = self.layout.range_len();
        if self.draws > available {
            return Err(ConfigError::DrawsExceedRange {
                draws: self.draws,
                available,
            });
        }
        Ok(())
    }
}
