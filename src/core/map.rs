//! Static occupancy grid and map parsing.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map text has no rows")]
    Empty,
    #[error("map is {width}x{height}, need at least 3x3")]
    TooSmall { width: usize, height: usize },
    #[error("border cell ({col},{row}) is open; the arena must be enclosed")]
    Unenclosed { col: i32, row: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

/// Immutable tile grid. One cell spans one world unit; a world position
/// lands in the cell at (floor(x), floor(y)).
#[derive(Debug, Clone)]
pub struct GridMap {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

const DEFAULT_ARENA: &str = "\
##########
#        #
# # ## # #
# #    # #
#   #    #
# # # ## #
# #      #
#   # #  #
#        #
##########";

impl GridMap {
    /// Parse a text map: space and '.' are open, anything else is wall.
    /// Ragged rows are padded with wall; the border must be fully closed.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|ch| if ch == ' ' || ch == '.' { Cell::Empty } else { Cell::Wall })
                .collect::<Vec<_>>();
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(MapError::Empty);
        }

        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let height = rows.len();
        if width < 3 || height < 3 {
            return Err(MapError::TooSmall { width, height });
        }
        for r in &mut rows {
            r.resize(width, Cell::Wall);
        }

        let map = Self {
            width: width as i32,
            height: height as i32,
            cells: rows.into_iter().flatten().collect(),
        };
        for row in 0..map.height {
            for col in 0..map.width {
                let border =
                    row == 0 || col == 0 || row == map.height - 1 || col == map.width - 1;
                if border && !map.is_wall(col, row) {
                    return Err(MapError::Unenclosed { col, row });
                }
            }
        }
        Ok(map)
    }

    /// The built-in 10x10 arena.
    pub fn default_arena() -> Self {
        Self::parse(DEFAULT_ARENA).expect("built-in arena is well-formed")
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Out-of-bounds coordinates report a wall.
    #[inline]
    pub fn is_wall(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 || col >= self.width || row >= self.height {
            return true;
        }
        self.cells[(row * self.width + col) as usize] == Cell::Wall
    }

    /// Cell test at a world position.
    #[inline]
    pub fn is_solid_at(&self, x: f32, y: f32) -> bool {
        self.is_wall(x.floor() as i32, y.floor() as i32)
    }

    /// All open cells, as (col, row).
    pub fn empty_cells(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if !self.is_wall(col, row) {
                    out.push((col, row));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_wall() {
        let map = GridMap::default_arena();
        assert!(map.is_wall(-1, 5));
        assert!(map.is_wall(5, -1));
        assert!(map.is_wall(map.width(), 5));
        assert!(map.is_wall(5, map.height()));
        assert!(map.is_wall(-100, 1_000_000));
    }

    #[test]
    fn default_arena_is_enclosed() {
        let map = GridMap::default_arena();
        assert_eq!(map.width(), 10);
        assert_eq!(map.height(), 10);
        for col in 0..map.width() {
            assert!(map.is_wall(col, 0));
            assert!(map.is_wall(col, map.height() - 1));
        }
        for row in 0..map.height() {
            assert!(map.is_wall(0, row));
            assert!(map.is_wall(map.width() - 1, row));
        }
        assert!(!map.is_wall(1, 1));
    }

    #[test]
    fn world_positions_map_by_floor() {
        let map = GridMap::default_arena();
        assert!(!map.is_solid_at(1.5, 1.5));
        assert!(map.is_solid_at(0.99, 1.5));
        assert!(map.is_solid_at(2.0, 2.0)); // cell (2,2) is a wall
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(matches!(GridMap::parse(""), Err(MapError::Empty)));
        assert!(matches!(GridMap::parse("\n\n"), Err(MapError::Empty)));
    }

    #[test]
    fn parse_rejects_open_border() {
        let text = "###\n# #\n# #"; // bottom row open in the middle... padded, but row 2 col 1 open
        assert!(matches!(
            GridMap::parse(text),
            Err(MapError::Unenclosed { .. })
        ));
    }

    #[test]
    fn parse_pads_ragged_rows_with_wall() {
        let map = GridMap::parse("#####\n#  #\n#####").unwrap();
        assert_eq!(map.width(), 5);
        assert!(map.is_wall(4, 1)); // padding
        assert!(!map.is_wall(1, 1));
    }
}
