//! Plain-text maze layouts.
//!
//! A `rows × cols` maze is drawn as a frame of `2·rows + 1` lines, each
//! `2·cols + 1` characters wide:
//!
//! ```text
//! +-+-+-+
//! | |   |
//! + +-+ +
//! |     |
//! +-+-+-+
//! ```
//!
//! Cells sit at odd line / odd column positions. Corners (`+` or `#`) sit at
//! even / even positions. Between two cells, `-`, `|` or `#` is a wall and a
//! space or `.` is an open passage. Empty lines are ignored.

use std::fmt;

use crate::geom::{Cell, Direction};
use crate::maze::Maze;
use crate::walls::Walls;

/// Errors that can occur when parsing a maze layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The layout contains no lines.
    Empty,
    /// A line does not have the width of the first line.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The frame is not `(2·rows + 1) × (2·cols + 1)` with at least one cell.
    InvalidDimensions { width: usize, height: usize },
    /// A character not allowed at its position was found.
    InvalidChar { ch: char, line: usize, column: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze layout: empty"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "maze layout: line {line} is {found} characters wide, expected {expected}"
            ),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "maze layout: frame of {width}x{height} characters does not describe a grid"
            ),
            Self::InvalidChar { ch, line, column } => write!(
                f,
                "maze layout: invalid character \u{201c}{ch}\u{201d} at line {line}, column {column}"
            ),
        }
    }
}

impl std::error::Error for MazeError {}

#[inline]
fn is_opening(ch: char) -> bool {
    ch == ' ' || ch == '.'
}

impl Maze {
    /// Parse a maze from its text layout.
    ///
    /// Boundary openings are kept in the wall records of the boundary cells;
    /// interior passages are always recorded on both sides.
    pub fn parse(layout: &str) -> Result<Maze, MazeError> {
        let lines: Vec<Vec<char>> = layout
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().collect())
            .collect();
        let Some(first) = lines.first() else {
            return Err(MazeError::Empty);
        };
        let width = first.len();
        for (i, l) in lines.iter().enumerate() {
            if l.len() != width {
                return Err(MazeError::InconsistentSize {
                    line: i + 1,
                    expected: width,
                    found: l.len(),
                });
            }
        }
        let height = lines.len();
        if width < 3 || height < 3 || width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        // Validate every character against its position class.
        for (y, l) in lines.iter().enumerate() {
            for (x, &ch) in l.iter().enumerate() {
                let ok = match (y % 2 == 0, x % 2 == 0) {
                    (true, true) => ch == '+' || ch == '#',
                    (true, false) => ch == '-' || ch == '#' || is_opening(ch),
                    (false, true) => ch == '|' || ch == '#' || is_opening(ch),
                    (false, false) => is_opening(ch),
                };
                if !ok {
                    return Err(MazeError::InvalidChar {
                        ch,
                        line: y + 1,
                        column: x + 1,
                    });
                }
            }
        }

        let rows = (height / 2) as i32;
        let cols = (width / 2) as i32;
        let mut maze = Maze::new(rows, cols);
        for c in maze.cells() {
            let y = (2 * c.row - 1) as usize;
            let x = (2 * c.col - 1) as usize;
            let w: Walls = Direction::ALL
                .into_iter()
                .filter(|&d| {
                    let (dr, dc) = d.delta();
                    let yy = (y as i32 + dr) as usize;
                    let xx = (x as i32 + dc) as usize;
                    is_opening(lines[yy][xx])
                })
                .collect();
            maze.set_walls(c, w);
        }
        Ok(maze)
    }
}

impl Maze {
    /// Horizontal border line above row `r` (`r = rows + 1` is the bottom).
    fn write_horizontal(&self, f: &mut fmt::Formatter<'_>, r: i32) -> fmt::Result {
        let rows = self.rows();
        write!(f, "+")?;
        for c in 1..=self.cols() {
            let open = if r <= rows {
                self.walls(Cell::new(r, c)).is_open(Direction::North)
            } else {
                self.walls(Cell::new(rows, c)).is_open(Direction::South)
            };
            write!(f, "{}+", if open { ' ' } else { '-' })?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Maze {
    /// Write the maze in the layout format accepted by [`Maze::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let cols = self.cols();
        for r in 1..=rows {
            self.write_horizontal(f, r)?;
            let first = self.walls(Cell::new(r, 1));
            write!(f, "{}", if first.is_open(Direction::West) { ' ' } else { '|' })?;
            for c in 1..=cols {
                let open = self.walls(Cell::new(r, c)).is_open(Direction::East);
                write!(f, " {}", if open { ' ' } else { '|' })?;
            }
            writeln!(f)?;
        }
        self.write_horizontal(f, rows + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BY_THREE: &str = "\
+-+-+-+
| |   |
+ +-+ +
|     |
+-+-+-+
";

    #[test]
    fn parse_dimensions_and_walls() {
        let m = Maze::parse(TWO_BY_THREE).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(m.is_symmetric());
        assert!(!m.is_open_between(Cell::new(1, 1), Cell::new(1, 2)));
        assert!(m.is_open_between(Cell::new(1, 2), Cell::new(1, 3)));
        assert!(m.is_open_between(Cell::new(1, 1), Cell::new(2, 1)));
        assert!(!m.is_open_between(Cell::new(1, 2), Cell::new(2, 2)));
        assert!(m.is_open_between(Cell::new(1, 3), Cell::new(2, 3)));
        assert!(m.is_open_between(Cell::new(2, 1), Cell::new(2, 2)));
    }

    #[test]
    fn display_round_trips() {
        let m = Maze::parse(TWO_BY_THREE).unwrap();
        assert_eq!(m.to_string(), TWO_BY_THREE);
        assert_eq!(Maze::parse(&m.to_string()).unwrap(), m);
    }

    #[test]
    fn dots_and_hashes_are_accepted() {
        let m = Maze::parse("###\n#.#\n###").unwrap();
        assert_eq!(m.rows(), 1);
        assert_eq!(m.cols(), 1);
        assert_eq!(m.walls(Cell::new(1, 1)), Walls::CLOSED);
    }

    #[test]
    fn boundary_opening_kept_in_record() {
        let m = Maze::parse("+ +\n| |\n+-+").unwrap();
        assert!(m.walls(Cell::new(1, 1)).is_open(Direction::North));
        assert!(!m.is_symmetric());
    }

    #[test]
    fn empty_layout() {
        assert_eq!(Maze::parse(""), Err(MazeError::Empty));
        assert_eq!(Maze::parse("\n\n"), Err(MazeError::Empty));
    }

    #[test]
    fn inconsistent_size() {
        let err = Maze::parse("+-+\n| |\n+-+-+").unwrap_err();
        assert_eq!(
            err,
            MazeError::InconsistentSize {
                line: 3,
                expected: 3,
                found: 5
            }
        );
    }

    #[test]
    fn even_dimensions_rejected() {
        assert!(matches!(
            Maze::parse("+-+-\n|  |\n+-+-"),
            Err(MazeError::InvalidDimensions { width: 4, height: 3 })
        ));
        assert!(matches!(
            Maze::parse("+\n|\n+"),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn invalid_char_position() {
        let err = Maze::parse("+-+\n|x|\n+-+").unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidChar {
                ch: 'x',
                line: 2,
                column: 2
            }
        );
        // A vertical bar is not a horizontal wall.
        assert!(matches!(
            Maze::parse("+|+\n| |\n+-+"),
            Err(MazeError::InvalidChar { ch: '|', .. })
        ));
    }

    #[test]
    fn error_messages() {
        let e = MazeError::InvalidChar {
            ch: 'x',
            line: 2,
            column: 2,
        };
        assert!(e.to_string().contains("line 2, column 2"));
        assert_eq!(MazeError::Empty.to_string(), "maze layout: empty");
    }
}
