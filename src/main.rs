use anyhow::{anyhow, Result};
use clap::Parser;
use log::{info, warn};

use std::cmp::Ordering;
use std::io::{stdin, stdout, Stdin, Write};
use std::time::Duration;

use tictactoe_ai::{analysis::*, board::*, solver::Solver};

mod session;
use session::*;

#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about = "Play Tic-tac-toe against a perfect opponent", long_about = None)]
struct Args {
    /// The side you play: A moves first, B second. Asked interactively when omitted
    #[arg(long)]
    human: Option<Player>,

    /// Let the engine play both sides
    #[arg(long, conflicts_with = "human")]
    ai_vs_ai: bool,

    /// Pause between engine moves when the engine plays both sides
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Show the score of every move before each of your turns
    #[arg(long)]
    hints: bool,

    /// Check the engine's choice in every reachable position, then exit
    #[arg(long)]
    verify: bool,
}

fn read_line(stdin: &Stdin) -> Result<String> {
    let mut buffer = String::new();
    if stdin.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("standard input closed"));
    }
    Ok(buffer)
}

fn choose_player(stdin: &Stdin) -> Result<Player> {
    loop {
        print!("Which player do you want to be? A moves first. A/B: ");
        stdout().flush()?;

        match read_line(stdin)?.parse::<Player>() {
            Ok(player) => return Ok(player),
            Err(err) => println!("{}", err),
        }
    }
}

fn print_hints(state: &GameState) {
    let hints: Vec<String> = score_moves(state)
        .iter()
        .map(|(cell, score)| format!("{}: {}", cell, score))
        .collect();
    println!("Move scores: {}", hints.join(", "));
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.verify {
        let report = verify_engine(true);
        if !report.is_sound() {
            return Err(anyhow!(
                "engine picked a suboptimal move in {} of {} positions",
                report.mismatches.len(),
                report.positions
            ));
        }
        println!("Engine plays optimally in all {} positions", report.positions);
        return Ok(());
    }

    let stdin = stdin();

    println!("Welcome to Tic-tac-toe\n");

    let human = if args.ai_vs_ai {
        None
    } else {
        match args.human {
            Some(player) => Some(player),
            None => Some(choose_player(&stdin)?),
        }
    };
    info!("starting game, human player: {:?}", human);

    let mut session = Session::new(human);

    // game loop
    loop {
        session.display()?;

        match session.outcome {
            Outcome::InProgress => {
                let player = session.state().player;
                let next_move = if session.is_human_turn() {
                    if args.hints {
                        print_hints(session.state());
                    }
                    print!("Move input > ");
                    stdout().flush()?;
                    let input_str = read_line(&stdin)?;

                    match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            warn!("rejected move input {:?}", input_str.trim());
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(cell) => cell,
                    }

                // AI player
                } else {
                    println!("AI is thinking...");
                    stdout().flush()?;

                    // slow down play if both players are AI
                    if session.human.is_none() {
                        std::thread::sleep(Duration::from_millis(args.delay_ms));
                    }

                    let mut solver = Solver::new(*session.state());
                    let (score, best_move) = solver.solve()?;

                    match score.cmp(&0) {
                        Ordering::Greater => println!("Player {} can force a win.", player),
                        Ordering::Less => {
                            println!("Player {} can force a win.", player.opponent())
                        }
                        Ordering::Equal => {
                            println!("Player {} can at best force a draw.", player)
                        }
                    }

                    println!("Best move: {}", best_move);
                    best_move
                };

                if let Err(err) = session.play_checked(next_move) {
                    if !err.is_invalid_move() {
                        return Err(err.into());
                    }
                    warn!("rejected move {} for player {}: {}", next_move, player, err);
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            Outcome::PlayerAWin => {
                println!("Player A wins!");
                break;
            }
            Outcome::PlayerBWin => {
                println!("Player B wins!");
                break;
            }
            Outcome::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    info!("game finished: {}", session.game);
    Ok(())
}
