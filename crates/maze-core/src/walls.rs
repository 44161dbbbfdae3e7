//! Per-cell openness records.

use std::fmt;

use crate::geom::Direction;

/// Which sides of a cell are open, as a 4-bit set.
///
/// A set bit means the passage in that direction is open. The default value
/// is fully walled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls(u8);

impl Walls {
    /// Every side walled.
    pub const CLOSED: Self = Self(0);
    /// Every side open.
    pub const OPEN: Self = Self(0b1111);

    const fn bit(dir: Direction) -> u8 {
        match dir {
            Direction::North => 1 << 0,
            Direction::South => 1 << 1,
            Direction::West => 1 << 2,
            Direction::East => 1 << 3,
        }
    }

    /// Build a record from raw bits (N=1, S=2, W=4, E=8). Higher bits are
    /// discarded.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Raw bit representation.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the side facing `dir` is open.
    #[inline]
    pub const fn is_open(self, dir: Direction) -> bool {
        self.0 & Self::bit(dir) != 0
    }

    /// Return a copy with `dir` opened.
    #[inline]
    #[must_use]
    pub const fn with_open(self, dir: Direction) -> Self {
        Self(self.0 | Self::bit(dir))
    }

    /// Return a copy with `dir` walled.
    #[inline]
    #[must_use]
    pub const fn with_closed(self, dir: Direction) -> Self {
        Self(self.0 & !Self::bit(dir))
    }

    /// Open directions in neighbour enumeration order.
    pub fn open_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.is_open(d))
    }

    /// Number of open sides.
    #[inline]
    pub const fn count_open(self) -> u32 {
        self.0.count_ones()
    }
}

impl FromIterator<Direction> for Walls {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Walls::CLOSED, Walls::with_open)
    }
}

impl fmt::Display for Walls {
    /// Open sides as letters, e.g. `NE`; `-` when fully walled.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for d in self.open_directions() {
            write!(f, "{}", d.letter())?;
        }
        Ok(())
    }
}
