//! Board model: cells, players and immutable game states

use std::fmt;
use std::str::FromStr;

use crate::{Error, Move, CELLS, SIZE};

mod static_masks {
    use crate::{CELLS, SIZE};

    pub const fn full_board_mask() -> u16 {
        ((1u32 << CELLS) - 1) as u16
    }

    // rows first, then columns, then the two diagonals
    pub const fn line_masks() -> [u16; 2 * SIZE + 2] {
        let mut masks = [0u16; 2 * SIZE + 2];
        let mut i = 0;
        while i < SIZE {
            let mut j = 0;
            while j < SIZE {
                masks[i] |= 1 << (i * SIZE + j);
                masks[SIZE + i] |= 1 << (j * SIZE + i);
                j += 1;
            }
            masks[2 * SIZE] |= 1 << (i * SIZE + i);
            masks[2 * SIZE + 1] |= 1 << (i * SIZE + SIZE - 1 - i);
            i += 1;
        }
        masks
    }
}

/// Bitmasks of every winning line: 3 rows, 3 columns and 2 diagonals
pub const LINES: [u16; 2 * SIZE + 2] = static_masks::line_masks();

/// One of the two players. `A` always moves first
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Player::A),
            "B" | "b" => Ok(Player::B),
            other => Err(Error::InvalidPlayer(other.to_string())),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

/// The content of one board cell
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerA => 'O',
            Cell::PlayerB => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' => Some(Cell::Empty),
            'A' | 'a' | 'O' | 'o' => Some(Cell::PlayerA),
            'B' | 'b' | 'X' | 'x' => Some(Cell::PlayerB),
            _ => None,
        }
    }
}

/// The result of a game as seen from a board
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Outcome {
    InProgress,
    PlayerAWin,
    PlayerBWin,
    Draw,
}

/// A 3x3 board stored as one bitmask per player
///
/// Bit `i` of a mask is set when that player owns cell `i`, with cells
/// numbered row-major from the top left.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Board {
    a_mask: u16,
    b_mask: u16,
}

impl Board {
    pub fn new() -> Self {
        Self {
            a_mask: 0,
            b_mask: 0,
        }
    }

    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        let mut board = Self::new();
        for (index, cell) in cells.iter().enumerate() {
            match cell {
                Cell::PlayerA => board.a_mask |= 1 << index,
                Cell::PlayerB => board.b_mask |= 1 << index,
                Cell::Empty => {}
            }
        }
        board
    }

    /// The content of cell `index`, which must be below [`CELLS`]
    pub fn cell(&self, index: usize) -> Cell {
        debug_assert!(index < CELLS);
        let bit = 1 << index;
        if self.a_mask & bit != 0 {
            Cell::PlayerA
        } else if self.b_mask & bit != 0 {
            Cell::PlayerB
        } else {
            Cell::Empty
        }
    }

    pub fn cells(&self) -> [Cell; CELLS] {
        let mut cells = [Cell::Empty; CELLS];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = self.cell(index);
        }
        cells
    }

    pub fn player_mask(&self, player: Player) -> u16 {
        match player {
            Player::A => self.a_mask,
            Player::B => self.b_mask,
        }
    }

    /// Mask of all occupied cells
    pub fn board_mask(&self) -> u16 {
        self.a_mask | self.b_mask
    }

    pub fn num_moves(&self) -> usize {
        self.board_mask().count_ones() as usize
    }

    /// Whether `player` owns every cell of any row, column or diagonal
    pub fn has_line(&self, player: Player) -> bool {
        let mask = self.player_mask(player);
        LINES.iter().any(|&line| mask & line == line)
    }

    pub fn is_full(&self) -> bool {
        self.board_mask() == static_masks::full_board_mask()
    }

    /// A board is terminal once it is full or either player has a line
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.has_line(Player::A) || self.has_line(Player::B)
    }

    pub fn is_legal_move(&self, cell: Move) -> bool {
        cell < CELLS && self.board_mask() & (1 << cell) == 0
    }

    /// Like [`is_legal_move`](Self::is_legal_move), but says why a move is rejected
    pub fn check_move(&self, cell: Move) -> Result<(), Error> {
        if cell >= CELLS {
            return Err(Error::MoveOutOfRange(cell));
        }
        if !self.cell(cell).is_empty() {
            return Err(Error::CellOccupied(cell));
        }
        Ok(())
    }

    pub fn winner(&self) -> Outcome {
        if self.has_line(Player::A) {
            Outcome::PlayerAWin
        } else if self.has_line(Player::B) {
            Outcome::PlayerBWin
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    fn place(&mut self, cell: Move, player: Player) {
        match player {
            Player::A => self.a_mask |= 1 << cell,
            Player::B => self.b_mask |= 1 << cell,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells().chunks(SIZE) {
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

/// A board together with the player whose move it is
///
/// Game states are plain values: playing a move returns a new state and
/// leaves the original untouched.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GameState {
    pub board: Board,
    pub player: Player,
}

impl GameState {
    /// The empty board with player A to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            player: Player::A,
        }
    }

    pub fn with_player(board: Board, player: Player) -> Self {
        Self { board, player }
    }

    /// Plays a sequence of cell digits from the starting position, e.g. "4015"
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, Error> {
        let mut state = Self::new();

        for cell_char in moves.as_ref().chars() {
            match cell_char.to_digit(10).map(|c| c as usize) {
                Some(cell) => state = state.play_checked(cell)?,
                None => return Err(Error::InvalidMoveCharacter(cell_char)),
            }
        }
        Ok(state)
    }

    /// Parses nine cells such as "A-BAB----" (or "O-XOX....") with `player` to move
    pub fn from_cells<S: AsRef<str>>(cells: S, player: Player) -> Result<Self, Error> {
        let chars: Vec<char> = cells
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if chars.len() != CELLS {
            return Err(Error::InvalidBoardLength(chars.len()));
        }

        let mut parsed = [Cell::Empty; CELLS];
        for (position, (&character, cell)) in chars.iter().zip(parsed.iter_mut()).enumerate() {
            *cell = Cell::from_char(character)
                .ok_or(Error::InvalidCellCharacter { character, position })?;
        }
        Ok(Self::with_player(Board::from_cells(parsed), player))
    }

    /// Places the mover's symbol on `cell` and passes the turn
    ///
    /// The move must satisfy [`Board::is_legal_move`]; it is not checked here.
    /// Use [`play_checked`](Self::play_checked) for unvalidated input.
    pub fn apply_move(&self, cell: Move) -> GameState {
        debug_assert!(self.board.is_legal_move(cell));
        let mut board = self.board;
        board.place(cell, self.player);
        GameState {
            board,
            player: self.player.opponent(),
        }
    }

    /// Validates `cell` against this state before applying it
    pub fn play_checked(&self, cell: Move) -> Result<GameState, Error> {
        if self.board.is_terminal() {
            return Err(Error::GameOver);
        }
        self.board.check_move(cell)?;
        Ok(self.apply_move(cell))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
