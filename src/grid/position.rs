use std::fmt;

/// A cell of the grid. `x` grows to the east and `y` to the north; the bottom
/// left corner of a layout is `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell in `direction`. `Stop` returns `self`.
    #[inline(always)]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[inline(always)]
pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as u32
}

#[inline(always)]
pub fn euclidean_distance(a: Position, b: Position) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

/// The four moving directions, in the order successors are generated.
pub const ALL_MOVES: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

impl Direction {
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    /// Returns the opposite direction. `Stop` is its own reverse.
    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_reverse() {
        let origin = Position::new(3, 3);
        for direction in ALL_MOVES.iter() {
            let moved = origin.step(*direction);
            assert_eq!(1, manhattan_distance(origin, moved));
            assert_eq!(origin, moved.step(direction.reverse()));
        }
        assert_eq!(origin, origin.step(Direction::Stop));
        assert_eq!(Position::new(3, 4), origin.step(Direction::North));
    }

    #[test]
    fn test_distances() {
        let a = Position::new(1, 1);
        let b = Position::new(4, 5);
        assert_eq!(7, manhattan_distance(a, b));
        assert_eq!(5.0, euclidean_distance(a, b));
        assert_eq!(0, manhattan_distance(b, b));
    }
}
