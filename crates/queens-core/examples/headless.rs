//! Basic headless run of the queens domination engine.

use queens_core::{BoardSize, GameSession, Position};

fn main() {
    let mut session = GameSession::new(BoardSize::parse("4x4").expect("valid size"));
    println!("Fresh {} board:\n{}", session.size(), session.board());

    // A classic non-attacking 4-queens placement dominates the whole board.
    let queens = [
        Position::new(0, 1),
        Position::new(1, 3),
        Position::new(2, 0),
        Position::new(3, 2),
    ];
    for queen in queens {
        let outcome = session.toggle(queen).expect("in bounds");
        println!(
            "Placed queen at {} ({} squares touched, solved: {})",
            queen,
            outcome.changed.len(),
            outcome.solved
        );
    }

    println!("\n{}", session.board());
    println!("Queens used: {}", session.queens_placed());
    match session.best_score() {
        Some(best) => println!("Best: {}", best),
        None => println!("Best: Not solved yet"),
    }

    // Taking one queen back leaves undominated squares again.
    session.toggle(queens[0]).expect("in bounds");
    println!(
        "\nAfter removing {}: solved = {}\n{}",
        queens[0],
        session.is_solved(),
        session.board()
    );
}
