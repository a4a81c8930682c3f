//! Team (side) representation.

/// The two sides of a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Team {
    White = 0,
    Black = 1,
}

impl Team {
    /// Both teams, White first.
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    /// Returns the opposing team.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Returns the row step a pawn of this team advances by (+1 for White, -1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Returns the row this team's pawns start on (2 for White, 7 for Black).
    ///
    /// Pawns on this row may advance two squares.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Team::White => 2,
            Team::Black => 7,
        }
    }

    /// Returns the row on which this team's pawns promote (8 for White, 1 for Black).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Team::White => 8,
            Team::Black => 1,
        }
    }

    /// Returns the row holding this team's pieces at the start (1 for White, 8 for Black).
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Team::White => 1,
            Team::Black => 8,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_team() {
        assert_eq!(Team::White.opposite(), Team::Black);
        assert_eq!(Team::Black.opposite(), Team::White);
    }

    #[test]
    fn pawn_direction() {
        assert_eq!(Team::White.pawn_direction(), 1);
        assert_eq!(Team::Black.pawn_direction(), -1);
    }

    #[test]
    fn pawn_rows() {
        assert_eq!(Team::White.pawn_start_row(), 2);
        assert_eq!(Team::Black.pawn_start_row(), 7);
        assert_eq!(Team::White.promotion_row(), 8);
        assert_eq!(Team::Black.promotion_row(), 1);
    }

    #[test]
    fn back_row() {
        assert_eq!(Team::White.back_row(), 1);
        assert_eq!(Team::Black.back_row(), 8);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Team::White), "White");
        assert_eq!(format!("{}", Team::Black), "Black");
    }
}
