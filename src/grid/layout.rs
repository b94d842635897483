//! Grid layouts described as text.
//!
//! Each line is one row of the grid, top row first:
//!
//! | char | meaning              |
//! |------|----------------------|
//! | `%`  | wall                 |
//! | `.`  | food                 |
//! | `o`  | capsule              |
//! | `P`  | agent start          |
//! | `G`  | ghost start          |
//! | ` `  | empty                |

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use super::Position;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Layout is empty")]
    Empty,
    #[error("Invalid layout character {character:?} at row {row}, column {column}")]
    InvalidCharacter {
        character: char,
        row: usize,
        column: usize,
    },
    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Layout has no agent start (`P`)")]
    MissingAgent,
    #[error("Layout has more than one agent start (`P`)")]
    MultipleAgents,
    #[error("Could not read layout {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub const TINY_MAZE: &str = "\
%%%%%%%
%    P%
% %%% %
%  %  %
%%   %%
%. %%%%
%%%%%%%";

pub const OPEN_MAZE: &str = "\
%%%%%%%%%%%%
%P         %
%          %
%   %%%%   %
%      %   %
%      %  .%
%%%%%%%%%%%%";

pub const SMALL_PURSUIT: &str = "\
%%%%%%%%%%
%o....G..%
%.%%.%%%.%
%.%  P  .%
%.%%.%%%.%
%....G..o%
%%%%%%%%%%";

pub const TRAPPED_PURSUIT: &str = "\
%%%%%%%%
% P  G %
% %%%% %
%......%
%%%%%%%%";

/// Returns the text of a built-in layout.
pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "tinyMaze" => Some(TINY_MAZE),
        "openMaze" => Some(OPEN_MAZE),
        "smallPursuit" => Some(SMALL_PURSUIT),
        "trappedPursuit" => Some(TRAPPED_PURSUIT),
        _ => None,
    }
}

/// The static part of a grid world: its walls and where everything starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    width: i32,
    height: i32,
    walls: Vec<bool>,
    food: Vec<Position>,
    capsules: Vec<Position>,
    agent_start: Position,
    ghost_starts: Vec<Position>,
}

impl Layout {
    /// Loads a built-in layout by name, or else reads a layout file.
    pub fn load(name_or_path: &str) -> Result<Self, LayoutError> {
        if let Some(text) = builtin(name_or_path) {
            return text.parse();
        }

        let path = Path::new(name_or_path);
        let text = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns true for walls and for every cell outside the grid.
    #[inline(always)]
    pub fn is_wall(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 || position.x >= self.width || position.y >= self.height {
            return true;
        }
        self.walls[(position.y * self.width + position.x) as usize]
    }

    /// Food positions, ordered by column then row.
    pub fn food(&self) -> &[Position] {
        &self.food
    }

    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    pub fn agent_start(&self) -> Position {
        self.agent_start
    }

    pub fn ghost_starts(&self) -> &[Position] {
        &self.ghost_starts
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .collect();

        let expected = match rows.first() {
            Some(row) => row.chars().count(),
            None => return Err(LayoutError::Empty),
        };

        let height = rows.len() as i32;
        let width = expected as i32;
        let mut walls = vec![false; rows.len() * expected];
        let mut food = Vec::new();
        let mut capsules = Vec::new();
        let mut agent_start = None;
        let mut ghost_starts = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }

            let y = height - 1 - row as i32;
            for (column, character) in line.chars().enumerate() {
                let position = Position::new(column as i32, y);
                match character {
                    '%' => walls[(y * width) as usize + column] = true,
                    '.' => food.push(position),
                    'o' => capsules.push(position),
                    'P' => {
                        if agent_start.replace(position).is_some() {
                            return Err(LayoutError::MultipleAgents);
                        }
                    }
                    'G' => ghost_starts.push(position),
                    ' ' => {}
                    _ => {
                        return Err(LayoutError::InvalidCharacter {
                            character,
                            row,
                            column,
                        })
                    }
                }
            }
        }

        food.sort();
        capsules.sort();

        Ok(Self {
            width,
            height,
            walls,
            food,
            capsules,
            agent_start: agent_start.ok_or(LayoutError::MissingAgent)?,
            ghost_starts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiny_maze() {
        let layout = Layout::load("tinyMaze").unwrap();

        assert_eq!(7, layout.width());
        assert_eq!(7, layout.height());
        assert_eq!(Position::new(5, 5), layout.agent_start());
        assert_eq!(&[Position::new(1, 1)], layout.food());
        assert!(layout.capsules().is_empty());
        assert!(layout.ghost_starts().is_empty());
        assert!(layout.is_wall(Position::new(0, 0)));
        assert!(layout.is_wall(Position::new(2, 4)));
        assert!(!layout.is_wall(Position::new(5, 4)));
    }

    #[test]
    fn test_outside_the_grid_is_wall() {
        let layout = Layout::load("tinyMaze").unwrap();

        assert!(layout.is_wall(Position::new(-1, 3)));
        assert!(layout.is_wall(Position::new(3, 7)));
        assert!(layout.is_wall(Position::new(7, 3)));
    }

    #[test]
    fn test_parse_pursuit_layout() {
        let layout = Layout::load("smallPursuit").unwrap();

        assert_eq!(Position::new(5, 3), layout.agent_start());
        assert_eq!(
            vec![Position::new(6, 5), Position::new(5, 1)],
            layout.ghost_starts().to_vec()
        );
        assert_eq!(
            &[Position::new(1, 5), Position::new(8, 1)],
            layout.capsules()
        );
        assert_eq!(20, layout.food().len());
        assert!(layout.food().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<Layout>(), Err(LayoutError::Empty)));
        assert!(matches!(
            "%%%\n%P%%\n%%%".parse::<Layout>(),
            Err(LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 4
            })
        ));
        assert!(matches!(
            "%%%\n% %\n%%%".parse::<Layout>(),
            Err(LayoutError::MissingAgent)
        ));
        assert!(matches!(
            "%%%%\n%PP%\n%%%%".parse::<Layout>(),
            Err(LayoutError::MultipleAgents)
        ));
        assert!(matches!(
            "%%%\n%P#\n%%%".parse::<Layout>(),
            Err(LayoutError::InvalidCharacter {
                character: '#',
                row: 1,
                column: 2
            })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Layout::load("/nonexistent/layout.lay");
        assert!(matches!(result, Err(LayoutError::Io { .. })));
    }
}
