//! CLI high-card example.
//!
//! Set `RUST_LOG=debug` to see the engine's own log lines.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use highcard::{Game, GameOptions, GameOutcome, GameState, RoundOutcome};

fn main() {
    env_logger::init();
    println!("=== HIGH CARD GAME ===");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    for seat in 1..=2 {
        loop {
            let Some(name) = prompt_line(&format!("Enter Player {seat} name: ")) else {
                return;
            };
            let age = prompt_age(&format!("Enter Player {seat} age (blank to skip): "));
            match game.join(&name, age) {
                Ok(_) => break,
                Err(err) => println!("Error: {err}"),
            }
        }
    }

    println!("\nShuffling deck...");
    println!("Dealing cards...");
    if let Err(err) = game.deal() {
        println!("Game error: {err}");
        return;
    }

    let players = game.players();
    println!("\n=== STARTING GAME ===");
    while game.state() == GameState::Playing {
        let round = match game.play_round() {
            Ok(round) => round,
            Err(err) => {
                println!("Game error: {err}");
                return;
            }
        };

        println!("\n--- Round {} ---", round.round);
        for play in &round.plays {
            println!(
                "{} plays: {} (Value: {})",
                players[play.seat].name(),
                play.card,
                play.card.value()
            );
        }
        match round.outcome {
            RoundOutcome::Winner(seat) => println!("{} wins the round!", players[seat].name()),
            RoundOutcome::Tie => println!("It's a tie! No points awarded."),
        }
    }

    let Some(result) = game.result() else {
        return;
    };

    println!("\n=== GAME OVER ===");
    println!("Final Scores:");
    for (player, score) in players.iter().zip(&result.scores) {
        println!("{}: {score} points", player.name());
    }
    println!("Discard pile: {}", game.discard_pile());

    match result.outcome {
        GameOutcome::Winner(seat) => println!("\n{} WINS THE GAME!", players[seat].name()),
        GameOutcome::Tie => println!("\nThe game is a TIE!"),
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_owned()),
    }
}

fn prompt_age(prompt: &str) -> Option<u32> {
    loop {
        let input = prompt_line(prompt)?;
        if input.is_empty() {
            return None;
        }
        match input.parse::<u32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a non-negative number."),
        }
    }
}
