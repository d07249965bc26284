use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use tictactoe_ai::{
    board::{Cell, GameState, Outcome, Player},
    Error, Move, SIZE,
};

/// The game currently being played, owned by the driver
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    /// The side controlled from the keyboard, `None` when the engine plays both
    pub human: Option<Player>,
    /// Cells played so far, one digit per move
    pub game: String,
    pub outcome: Outcome,
}

impl Session {
    pub fn new(human: Option<Player>) -> Self {
        Self {
            state: GameState::new(),
            human,
            game: String::new(),
            outcome: Outcome::InProgress,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_human_turn(&self) -> bool {
        self.human == Some(self.state.player)
    }

    /// Plays `cell` for the player to move. Rejected moves leave the session unchanged
    pub fn play_checked(&mut self, cell: Move) -> Result<Outcome, Error> {
        self.state = self.state.play_checked(cell)?;
        self.game.push_str(&cell.to_string());
        self.outcome = self.state.board.winner();

        Ok(self.outcome)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        stdout.queue(PrintStyledContent(style("\n")))?;
        for row in 0..SIZE {
            for column in 0..SIZE {
                let index = row * SIZE + column;
                // empty cells show the index to type for them
                let content = match self.state.board.cell(index) {
                    Cell::Empty => style(index.to_string()).with(Color::DarkGrey),
                    cell @ Cell::PlayerA => style(cell.symbol().to_string())
                        .attribute(Attribute::Bold)
                        .with(Color::Red),
                    cell @ Cell::PlayerB => style(cell.symbol().to_string())
                        .attribute(Attribute::Bold)
                        .with(Color::Yellow),
                };
                let separator = if column + 1 < SIZE { " " } else { "\n" };
                stdout
                    .queue(PrintStyledContent(content))?
                    .queue(PrintStyledContent(style(separator)))?;
            }
        }
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejected_moves_leave_session_unchanged() {
        let mut session = Session::new(Some(Player::A));
        assert_eq!(session.play_checked(4), Ok(Outcome::InProgress));

        assert_eq!(session.play_checked(4), Err(Error::CellOccupied(4)));
        assert_eq!(session.play_checked(9), Err(Error::MoveOutOfRange(9)));
        assert_eq!(session.game, "4");
        assert_eq!(session.state().player, Player::B);
        assert!(!session.is_human_turn());
    }

    #[test]
    fn session_reports_outcome() {
        let mut session = Session::new(None);
        for &cell in [0, 1, 3, 4].iter() {
            assert_eq!(session.play_checked(cell), Ok(Outcome::InProgress));
        }
        assert_eq!(session.play_checked(6), Ok(Outcome::PlayerAWin));
        assert_eq!(session.play_checked(8), Err(Error::GameOver));
        assert_eq!(session.game, "01346");
    }
}
