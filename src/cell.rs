//! A single grid cell.

/// Shot state of a cell. Leaves `Unknown` at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotState {
    #[default]
    Unknown,
    Miss,
    Hit,
}

/// Occupancy and shot state of one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// A ship covers this cell.
    pub occupied: bool,
    /// The cell is in the adjacency buffer of a placed ship.
    pub buffered: bool,
    pub state: ShotState,
}

impl Cell {
    pub fn is_resolved(&self) -> bool {
        self.state != ShotState::Unknown
    }

    /// Glyph used when rendering. `show_ship` reveals unhit ship cells.
    pub fn glyph(&self, show_ship: bool) -> char {
        match self.state {
            ShotState::Miss => 'T',
            ShotState::Hit => 'X',
            ShotState::Unknown if show_ship && self.occupied => '■',
            ShotState::Unknown => '·',
        }
    }
}
