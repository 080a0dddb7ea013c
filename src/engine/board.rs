//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the Hexapawn board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'W',
            Cell::Black => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'W' | 'w' => Some(Cell::White),
            'B' | 'b' => Some(Cell::Black),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Convert side to the cell its pieces occupy
    pub fn to_cell(self) -> Cell {
        match self {
            Side::White => Cell::White,
            Side::Black => Cell::Black,
        }
    }

    /// Row delta of a forward step: white climbs toward row 0, black descends.
    pub fn forward(self) -> isize {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// The row this side must reach to win on a board with `rows` rows
    pub fn goal_row(self, rows: usize) -> usize {
        match self {
            Side::White => 0,
            Side::Black => rows - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Side {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Side::White),
            "black" | "b" => Ok(Side::Black),
            _ => Err(crate::Error::ParseSide {
                input: s.to_string(),
            }),
        }
    }
}

/// A (row, column) coordinate on the board.
///
/// Ordering is row-major, which is also the order moves are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Offset this position, returning `None` if it would leave the first quadrant.
    ///
    /// The result is not checked against any board; see [`Board::contains`].
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

/// A move: the piece on `from` goes to `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: impl Into<Position>, to: impl Into<Position>) -> Self {
        Move {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True for diagonal (capturing) moves
    pub fn is_diagonal(&self) -> bool {
        self.from.col != self.to.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// An m×n Hexapawn board.
///
/// Boards are values: equality is cell-by-cell and every transition returns
/// a new board, so snapshots kept in a history never alias a live game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked serialized form of a [`Board`]
#[derive(Deserialize)]
struct BoardRepr {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = crate::Error;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let BoardRepr { rows, cols, cells } = repr;
        if rows < 2 || cols < 1 {
            return Err(crate::Error::InvalidDimensions { rows, cols });
        }
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(crate::Error::InvalidBoardString {
                message: format!("found {} cells", cells.len()),
                context: format!("{rows}x{cols}"),
            });
        }
        Ok(Board { rows, cols, cells })
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] if `rows < 2` or `cols < 1`.
    pub fn empty(rows: usize, cols: usize) -> Result<Self, crate::Error> {
        if rows < 2 || cols < 1 {
            return Err(crate::Error::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Create the starting position: black on row 0, white on the last row.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] if `rows < 2` or `cols < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexapawn::engine::{Board, Cell, Position};
    ///
    /// let board = Board::initial(3, 3).unwrap();
    /// assert_eq!(board.get(Position::new(0, 1)), Some(Cell::Black));
    /// assert_eq!(board.get(Position::new(2, 1)), Some(Cell::White));
    /// assert_eq!(board.count(Cell::Empty), 3);
    /// ```
    pub fn initial(rows: usize, cols: usize) -> Result<Self, crate::Error> {
        let mut board = Self::empty(rows, cols)?;
        for col in 0..cols {
            board.cells[col] = Cell::Black;
            board.cells[(rows - 1) * cols + col] = Cell::White;
        }
        Ok(board)
    }

    /// Parse a board from text rows.
    ///
    /// `W` is a white pawn, `B` a black pawn, `.` or a space an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if the rows are ragged or empty, any character is
    /// invalid, or the dimensions are too small.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, crate::Error> {
        let context = rows
            .iter()
            .map(|r| r.as_ref())
            .collect::<Vec<_>>()
            .join("/");
        let cols = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut board = Self::empty(rows.len(), cols)?;

        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            if text.chars().count() != cols {
                return Err(crate::Error::InvalidBoardString {
                    message: format!(
                        "row {row} has {} cells, expected {cols}",
                        text.chars().count()
                    ),
                    context,
                });
            }
            for (col, c) in text.chars().enumerate() {
                board.cells[row * cols + col] =
                    Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                        character: c,
                        row,
                        col,
                        context: context.clone(),
                    })?;
            }
        }

        Ok(board)
    }

    /// Parse a board from a single string with rows separated by `/` or newlines.
    ///
    /// # Errors
    ///
    /// See [`Board::from_rows`].
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(|r| r.trim_end_matches('\r'))
            .filter(|r| !r.is_empty())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a position lies on the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get the cell at a position, or `None` if off the board
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos)
            .then(|| self.cells[pos.row * self.cols + pos.col])
    }

    /// Get the cell at a position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the position is off the board.
    pub fn piece_at(&self, pos: Position) -> Result<Cell, crate::Error> {
        self.get(pos).ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Return a copy of this board with `pos` set to `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the position is off the board.
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, pos: Position, cell: Cell) -> Result<Board, crate::Error> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        let mut next = self.clone();
        next.cells[pos.row * self.cols + pos.col] = cell;
        Ok(next)
    }

    /// Cells of a single row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Count cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Positions of all pieces belonging to `side`, in row-major order
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Position> + '_ {
        let target = side.to_cell();
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == target)
            .map(|(i, _)| Position::new(i / self.cols, i % self.cols))
    }

    pub(crate) fn out_of_bounds(&self, position: Position) -> crate::Error {
        crate::Error::OutOfBounds {
            position,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for &cell in self.row(row) {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
