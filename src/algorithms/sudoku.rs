//! 9×9 Sudoku solver using depth-first backtracking.
//!
//! Cells hold `1..=9`, `0` marks an empty cell. The solver fills the first
//! empty cell in row-major order with the smallest digit that fits its row,
//! column and 3×3 square, recursing until the grid is full or every digit has
//! failed.

use std::fmt;
use std::str::FromStr;

use crate::error::{DrillError, Result};

/// Grid side length
pub const SIZE: usize = 9;
const BOX: usize = 3;

/// Row and column of a cell
pub type Cell = (usize, usize);

/// A Sudoku grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[u8; SIZE]; SIZE],
}

impl Board {
    /// Build a board from rows, rejecting values above 9.
    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> Result<Self> {
        for (r, row) in rows.iter().enumerate() {
            if let Some(c) = row.iter().position(|v| *v > 9) {
                return Err(DrillError::validation(format!(
                    "cell ({}, {}) holds {}, expected 0-9",
                    r, c, row[c]
                )));
            }
        }
        Ok(Self { cells: rows })
    }

    /// The sample puzzle
    pub fn demo() -> Self {
        Self {
            cells: [
                [0, 0, 2, 0, 0, 8, 0, 0, 0],
                [0, 0, 0, 0, 0, 3, 7, 6, 2],
                [4, 3, 0, 0, 0, 0, 8, 0, 0],
                [0, 5, 0, 0, 3, 0, 0, 9, 0],
                [0, 4, 0, 0, 0, 0, 0, 2, 6],
                [0, 0, 0, 4, 6, 7, 0, 0, 0],
                [0, 8, 6, 7, 0, 4, 0, 0, 0],
                [0, 0, 0, 5, 1, 9, 0, 0, 8],
                [1, 7, 0, 0, 0, 6, 0, 0, 5],
            ],
        }
    }

    /// Value at a cell, `0` when empty
    pub fn get(&self, (row, col): Cell) -> u8 {
        self.cells[row][col]
    }

    /// Rows of the grid
    pub fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// First empty cell in row-major order
    pub fn find_empty_cell(&self) -> Option<Cell> {
        self.cells.iter().enumerate().find_map(|(row, contents)| {
            contents.iter().position(|v| *v == 0).map(|col| (row, col))
        })
    }

    pub fn valid_in_row(&self, row: usize, num: u8) -> bool {
        !self.cells[row].contains(&num)
    }

    pub fn valid_in_col(&self, col: usize, num: u8) -> bool {
        self.cells.iter().all(|row| row[col] != num)
    }

    pub fn valid_in_square(&self, row: usize, col: usize, num: u8) -> bool {
        let row_start = (row / BOX) * BOX;
        let col_start = (col / BOX) * BOX;
        self.cells[row_start..row_start + BOX]
            .iter()
            .all(|r| !r[col_start..col_start + BOX].contains(&num))
    }

    /// Whether `num` may be written into `cell`
    pub fn is_valid(&self, (row, col): Cell, num: u8) -> bool {
        self.valid_in_row(row, num) && self.valid_in_col(col, num) && self.valid_in_square(row, col, num)
    }

    /// Whether the givens already break a rule
    pub fn find_conflict(&self) -> Option<Cell> {
        let mut probe = *self;
        for row in 0..SIZE {
            for col in 0..SIZE {
                let value = self.cells[row][col];
                if value == 0 {
                    continue;
                }
                probe.cells[row][col] = 0;
                let ok = probe.is_valid((row, col), value);
                probe.cells[row][col] = value;
                if !ok {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Solve in place. Returns `false` (leaving the board unchanged) when no
    /// solution exists.
    pub fn solve(&mut self) -> bool {
        let Some((row, col)) = self.find_empty_cell() else {
            return true;
        };

        for guess in 1..=9 {
            if self.is_valid((row, col), guess) {
                self.cells[row][col] = guess;
                if self.solve() {
                    return true;
                }
                self.cells[row][col] = 0;
            }
        }

        false
    }

    /// Whether the board is full and breaks no rule
    pub fn is_solved(&self) -> bool {
        self.find_empty_cell().is_none() && self.find_conflict().is_none()
    }
}

impl FromStr for Board {
    type Err = DrillError;

    /// Parse 81 cells. `0`, `.` and `*` are empty; whitespace and the
    /// `|`, `-`, `+` grid separators are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut values = Vec::with_capacity(SIZE * SIZE);
        for c in s.chars() {
            match c {
                '1'..='9' => values.push(c as u8 - b'0'),
                '0' | '.' | '*' => values.push(0),
                '|' | '-' | '+' => {}
                c if c.is_whitespace() => {}
                other => {
                    return Err(DrillError::parse(format!("unexpected character '{}' in puzzle", other)));
                }
            }
        }

        if values.len() != SIZE * SIZE {
            return Err(DrillError::parse(format!(
                "puzzle must have {} cells, got {}",
                SIZE * SIZE,
                values.len()
            )));
        }

        let mut cells = [[0u8; SIZE]; SIZE];
        for (i, value) in values.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = value;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    /// One row per line, empty cells as `*`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|v| if *v == 0 { "*".to_string() } else { v.to_string() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Check the givens, then solve a copy of the board.
pub fn solve_sudoku(board: &Board) -> Result<Board> {
    if let Some((row, col)) = board.find_conflict() {
        return Err(DrillError::unsolvable(format!(
            "given at row {}, column {} conflicts with another given",
            row + 1,
            col + 1
        )));
    }

    let mut solved = *board;
    if solved.solve() {
        tracing::debug!("sudoku solved");
        Ok(solved)
    } else {
        Err(DrillError::unsolvable("the provided puzzle has no solution"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_SOLUTION: [[u8; 9]; 9] = [
        [9, 6, 2, 1, 7, 8, 3, 5, 4],
        [8, 1, 5, 9, 4, 3, 7, 6, 2],
        [4, 3, 7, 6, 5, 2, 8, 1, 9],
        [6, 5, 8, 2, 3, 1, 4, 9, 7],
        [7, 4, 3, 8, 9, 5, 1, 2, 6],
        [2, 9, 1, 4, 6, 7, 5, 8, 3],
        [5, 8, 6, 7, 2, 4, 9, 3, 1],
        [3, 2, 4, 5, 1, 9, 6, 7, 8],
        [1, 7, 9, 3, 8, 6, 2, 4, 5],
    ];

    #[test]
    fn test_demo_puzzle_solves() {
        let solved = solve_sudoku(&Board::demo()).unwrap();
        assert!(solved.is_solved());
        assert_eq!(solved.rows(), &DEMO_SOLUTION);
    }

    #[test]
    fn test_find_empty_cell() {
        assert_eq!(Board::demo().find_empty_cell(), Some((0, 0)));
        let solved = solve_sudoku(&Board::demo()).unwrap();
        assert_eq!(solved.find_empty_cell(), None);
    }

    #[test]
    fn test_validity_checks() {
        let board = Board::demo();
        assert!(!board.valid_in_row(0, 2));
        assert!(board.valid_in_row(0, 1));
        assert!(!board.valid_in_col(0, 4));
        assert!(!board.valid_in_square(0, 0, 3));
        assert!(!board.is_valid((0, 0), 1)); // 1 is in column 0
    }

    #[test]
    fn test_parse_and_display() {
        let text = Board::demo().to_string();
        assert!(text.starts_with("* * 2 * * 8 * * *\n"));
        let parsed: Board = text.parse().unwrap();
        assert_eq!(parsed, Board::demo());
    }

    #[test]
    fn test_parse_errors() {
        assert!("123".parse::<Board>().is_err());
        let mut bad = "0".repeat(80);
        bad.push('x');
        assert!(matches!(bad.parse::<Board>(), Err(DrillError::Parse(_))));
    }

    #[test]
    fn test_conflicting_givens_are_unsolvable() {
        let mut rows = *Board::demo().rows();
        rows[0][0] = 2; // row 0 already holds a 2
        let board = Board::from_rows(rows).unwrap();
        assert!(matches!(solve_sudoku(&board), Err(DrillError::Unsolvable(_))));
    }

    #[test]
    fn test_from_rows_rejects_large_values() {
        let mut rows = [[0u8; 9]; 9];
        rows[4][4] = 10;
        assert!(Board::from_rows(rows).is_err());
    }
}
