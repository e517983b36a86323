//! The [`Cell`] type: the state of one maze square.

/// State of a single maze cell.
///
/// Both [`Cell::Open`] and [`Cell::Goal`] are passable; only [`Cell::Wall`]
/// blocks movement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cell {
    #[default]
    Wall,
    Open,
    Goal,
}

impl Cell {
    /// Whether a walker may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Character used by the text dump.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
            Cell::Goal => 'G',
        }
    }
}
