//! Common types for Sea Battle: board errors, shot results and input errors.

/// Result of a shot that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit the last live cell of a ship, carrying its length.
    Sink(usize),
}

impl GuessResult {
    /// `true` for both `Hit` and `Sink`; the shooter keeps the turn.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned by Board operations. All of them are recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate or ship geometry lies outside the grid.
    OutOfBounds,
    /// Ship placement collides with an existing ship.
    CellOccupied,
    /// Ship placement touches the adjacency buffer of an existing ship.
    CellBuffered,
    /// Shot target was already resolved.
    AlreadyShot,
    /// Ship length is outside `1..=MAX_SHIP_LENGTH`.
    InvalidShipLength(usize),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinates are outside the board"),
            BoardError::CellOccupied => write!(f, "Cell is already occupied by a ship"),
            BoardError::CellBuffered => write!(f, "Cell touches another ship"),
            BoardError::AlreadyShot => write!(f, "Cell has already been shot"),
            BoardError::InvalidShipLength(len) => write!(f, "Ship length {} is not allowed", len),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Reasons a line of text is not a coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Input did not contain exactly two tokens; carries the token count.
    WrongArity(usize),
    /// A token was not an integer.
    NotANumber,
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::WrongArity(_) => write!(f, "Enter two numbers from 1 to 6"),
            InputError::NotANumber => write!(f, "Coordinates must be numbers"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// Errors produced while selecting the next target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    /// Input was malformed; the caller should ask again.
    Invalid(InputError),
    /// The input source is closed or unreadable.
    InputClosed,
    /// Every coordinate on the board has already been produced.
    Exhausted,
}

impl TargetError {
    /// `true` when asking again may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TargetError::Invalid(_))
    }
}

impl From<InputError> for TargetError {
    fn from(err: InputError) -> Self {
        TargetError::Invalid(err)
    }
}

impl core::fmt::Display for TargetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TargetError::Invalid(e) => write!(f, "Invalid input: {}", e),
            TargetError::InputClosed => write!(f, "Input closed"),
            TargetError::Exhausted => write!(f, "No untried coordinates left"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TargetError {}
