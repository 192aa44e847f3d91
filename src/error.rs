use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least one participant is required")]
    NoParticipants,

    #[error("Grid size must be between 1 and {max}, got {size}")]
    GridSize { size: usize, max: usize },

    #[error("Invalid number range: {0}")]
    InvalidNumberRange(String),

    #[error("Number range holds {available} values but a card needs {needed}")]
    NumberRangeTooSmall { needed: usize, available: usize },

    #[error("Column {column} draws from {available} values but needs {needed}")]
    ColumnBandTooNarrow {
        column: usize,
        needed: usize,
        available: usize,
    },

    #[error("{names} names supplied for only {participants} participants")]
    TooManyNames { names: usize, participants: usize },

    #[error("Number of winners ({winners}) cannot exceed number of players ({players})")]
    TooManyWinners { winners: usize, players: usize },

    #[error("Number of draws must be at least 1")]
    NoDraws,

    #[error("Cannot make {draws} distinct draws from a range of {available} numbers")]
    DrawsExceedRange { draws: usize, available: usize },

    #[error("Guaranteeing the winners needs {needed} draws but only {draws} were requested")]
    TooFewDraws { needed: usize, draws: usize },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("Layout overflow: content exceeds page bounds")]
    LayoutOverflow,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
