//! Error types for board placement and turn handling

/// Why a tile could not be placed
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("coordinate ({q}, {r}) is not on the board")]
    InvalidCoordinate { q: i8, r: i8 },

    #[error("cell ({q}, {r}) is already occupied")]
    CellOccupied { q: i8, r: i8 },
}

/// Errors returned by the game controller
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    #[error("letter '{0}' is not in the rack")]
    LetterNotInRack(char),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}
