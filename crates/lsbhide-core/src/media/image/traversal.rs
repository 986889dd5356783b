use std::fmt;
use std::str::FromStr;

use crate::error::LsbError;

/// The pixel visiting order, shared by hiding and solving.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    /// rows top to bottom, each row left to right
    #[default]
    Horizontal,
    /// columns left to right, each column top to bottom
    Vertical,
    /// anti-diagonals from the top left corner, each one walked with `x` increasing
    DiagonalUp,
    /// anti-diagonals from the top left corner, each one walked with `y` increasing
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalUp => "diagonal-up",
            Direction::DiagonalDown => "diagonal-down",
        }
    }
}

impl FromStr for Direction {
    type Err = LsbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            "diagonal-up" | "diagonalup" => Ok(Direction::DiagonalUp),
            "diagonal-down" | "diagonaldown" => Ok(Direction::DiagonalDown),
            _ => Err(LsbError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Yields every `(x, y)` coordinate of a `width` x `height` grid exactly once,
/// in the order given by a [`Direction`].
///
/// For the diagonal directions the grid is cut into anti-diagonals
/// `d = c1 + c2`, visited with increasing `d` and inside a diagonal with increasing `c1`.
/// `DiagonalUp` maps `(c1, c2)` to `(x, y)`, `DiagonalDown` to `(y, x)`.
///
/// ```rust
/// use lsbhide_core::media::image::{Direction, Traversal};
///
/// let order: Vec<_> = Traversal::new(Direction::DiagonalUp, 2, 2).collect();
/// assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct Traversal {
    direction: Direction,
    width: u64,
    height: u64,
    i: u64,
    remaining: u64,
    diagonal: u64,
    c1: u64,
}

impl Traversal {
    pub fn new(direction: Direction, width: u32, height: u32) -> Self {
        let (width, height) = (width as u64, height as u64);
        Self {
            direction,
            width,
            height,
            i: 0,
            remaining: width * height,
            diagonal: 0,
            c1: 0,
        }
    }

    /// bounds of `c1` and `c2` for the diagonal directions
    fn diagonal_axes(&self) -> (u64, u64) {
        match self.direction {
            Direction::DiagonalDown => (self.height, self.width),
            _ => (self.width, self.height),
        }
    }

    fn next_on_diagonal(&mut self) -> (u64, u64) {
        let (c1_max, c2_max) = self.diagonal_axes();
        while self.c1 > self.diagonal.min(c1_max - 1) {
            self.diagonal += 1;
            self.c1 = self.diagonal.saturating_sub(c2_max - 1);
        }
        let c1 = self.c1;
        let c2 = self.diagonal - c1;
        self.c1 += 1;
        (c1, c2)
    }
}

impl Iterator for Traversal {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let (x, y) = match self.direction {
            Direction::Horizontal => (self.i % self.width, self.i / self.width),
            Direction::Vertical => (self.i / self.height, self.i % self.height),
            Direction::DiagonalUp => self.next_on_diagonal(),
            Direction::DiagonalDown => {
                let (c1, c2) = self.next_on_diagonal();
                (c2, c1)
            }
        };
        self.i += 1;

        Some((x as u32, y as u32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, usize::try_from(self.remaining).ok())
    }
}

impl ExactSizeIterator for Traversal {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_walk_rows_first_when_horizontal() {
        let order: Vec<_> = Traversal::new(Direction::Horizontal, 3, 2).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn should_walk_columns_first_when_vertical() {
        let order: Vec<_> = Traversal::new(Direction::Vertical, 3, 2).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn should_walk_anti_diagonals_when_diagonal_up() {
        let order: Vec<_> = Traversal::new(Direction::DiagonalUp, 3, 2).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);

        let order: Vec<_> = Traversal::new(Direction::DiagonalUp, 2, 3).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (0, 2), (1, 1), (1, 2)]);
    }

    #[test]
    fn should_walk_transposed_anti_diagonals_when_diagonal_down() {
        let order: Vec<_> = Traversal::new(Direction::DiagonalDown, 3, 2).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (2, 0), (1, 1), (2, 1)]);

        let order: Vec<_> = Traversal::new(Direction::DiagonalDown, 2, 3).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn should_visit_every_coordinate_exactly_once() {
        for direction in Direction::ALL {
            for (width, height) in [(1, 1), (1, 7), (7, 1), (4, 6), (6, 4), (13, 13)] {
                let traversal = Traversal::new(direction, width, height);
                assert_eq!(traversal.len(), (width * height) as usize);

                let order: Vec<_> = traversal.collect();
                let unique: HashSet<_> = order.iter().copied().collect();
                assert_eq!(
                    order.len(),
                    (width * height) as usize,
                    "{direction} on {width}x{height} visited a wrong number of pixels"
                );
                assert_eq!(unique.len(), order.len(), "{direction} visited a pixel twice");
                assert!(order.iter().all(|&(x, y)| x < width && y < height));
            }
        }
    }

    #[test]
    fn should_be_empty_for_an_empty_grid() {
        for direction in Direction::ALL {
            assert_eq!(Traversal::new(direction, 0, 5).next(), None);
            assert_eq!(Traversal::new(direction, 5, 0).next(), None);
        }
    }

    #[test]
    fn should_parse_direction_names() {
        assert_eq!("horizontal".parse::<Direction>().unwrap(), Direction::Horizontal);
        assert_eq!("Vertical".parse::<Direction>().unwrap(), Direction::Vertical);
        assert_eq!("diagonalup".parse::<Direction>().unwrap(), Direction::DiagonalUp);
        assert_eq!(
            "diagonal-down".parse::<Direction>().unwrap(),
            Direction::DiagonalDown
        );
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(LsbError::InvalidDirection(_))
        ));
    }
}
