use serde::{Deserialize, Serialize};

/// Ground truth of a single tile, fixed once mines are placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Truth {
    Mine,
    SafeCount(u8),
}

impl Truth {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::SafeCount(0))
    }
}

impl Default for Truth {
    fn default() -> Self {
        Self::SafeCount(0)
    }
}

/// What the player currently sees on a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Flagged,
    Revealed(Truth),
}

pub const HIDDEN_SYMBOL: char = ' ';
pub const FLAG_SYMBOL: char = 'f';
pub const MINE_SYMBOL: char = 'x';

impl Visibility {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    /// Symbol handed to render sinks: blank, flag marker, digit or mine marker.
    pub fn symbol(self) -> char {
        match self {
            Self::Hidden => HIDDEN_SYMBOL,
            Self::Flagged => FLAG_SYMBOL,
            Self::Revealed(Truth::Mine) => MINE_SYMBOL,
            Self::Revealed(Truth::SafeCount(count)) => {
                char::from_digit(count.into(), 10).unwrap_or('?')
            }
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}
