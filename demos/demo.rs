//! Terminal play-through of the built-in question bank.
//!
//! Run with: `cargo run --example demo [-- <questions.json>]`
//!
//! This example shows how `trivia_engine` is wired into a host:
//!
//! 1. **Data source**: the built-in sample bank, or a JSON file passed as the
//!    first argument.
//! 2. **Feedback sink**: a channel; the host drains it after every call and
//!    prints the cue a real UI would play as audio.
//! 3. **Text shaper**: a closure applied only at display time.
//!
//! Set `RUST_LOG=trivia_engine=debug` to watch the engine's own log output.
//! Set `QUIZ_SEED=<u64>` for a reproducible question order.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use trivia_engine::{
    builtin_bank, JsonFile, QuestionSource, QuestionView, QuizSession, SessionConfig,
    SessionError, SessionEvent,
};

/// Print the active question with numbered options.
fn print_question(view: &QuestionView, remaining: usize) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  remaining: {}", view.difficulty, remaining);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", view.prompt);
    for opt in &view.options {
        if let Some(text) = &opt.text {
            println!("  [{}] {}", opt.slot + 1, text);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let config = SessionConfig {
        rng_seed: std::env::var("QUIZ_SEED").ok().and_then(|s| s.parse().ok()),
    };
    let source: Box<dyn QuestionSource> = match std::env::args().nth(1) {
        Some(path) => Box::new(JsonFile::new(path)),
        None       => Box::new(builtin_bank()),
    };

    let (tx, rx) = mpsc::channel();
    let mut session = QuizSession::from_config(&config).with_sink(tx);
    session.start_from(source.as_ref())?;

    // Mark the text so it is obvious where shaping happens.
    let shaper = |raw: &str| format!("\u{200F}{raw}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while let Some(record) = session.current_question() {
        print_question(&QuestionView::new(record, &shaper), session.size());
        print!("  > ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let choice = match line?.trim().parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                println!("  Enter the number of an option.");
                continue;
            }
        };

        match session.submit_answer(choice) {
            Ok(_) => {}
            Err(SessionError::InvalidChoice { choices, .. }) => {
                println!("  Option not assigned; pick 1-{choices}.");
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        for event in rx.try_iter() {
            match event {
                SessionEvent::AnswerResult { correct: true }  => println!("  ✓ Correct"),
                SessionEvent::AnswerResult { correct: false } => println!("  ✗ Wrong, try again"),
                SessionEvent::SessionCompleted                => println!("  Quiz complete!"),
                SessionEvent::QuestionPresented { .. }        => {}
            }
        }
        println!();
    }

    Ok(())
}
