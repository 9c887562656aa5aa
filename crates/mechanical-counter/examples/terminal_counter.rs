//! Terminal counter example
//!
//! Animates a counter to a goal and prints every frame as a row of wheels.
//! A wheel caught between two digits shows both, upper slot first.
//!
//! Run with: cargo run -p mechanical-counter --example terminal_counter -- [GOAL] [ATTRIBUTES.toml]
//!
//! Set `RUST_LOG=mechanical_counter=debug` to see the state machine log.

use std::time::{Duration, Instant};

use mechanical_counter::prelude::{ColumnTransition, CounterAttributes, MechanicalCounter};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(33);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let goal: Option<i64> = args.next().map(|arg| arg.parse()).transpose()?;
    let mut attributes = match args.next() {
        Some(path) => CounterAttributes::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => CounterAttributes {
            duration: 2000,
            ..CounterAttributes::default()
        },
    };
    if let Some(goal) = goal {
        attributes.goal = goal;
    }

    let mut counter = MechanicalCounter::from_attributes(&attributes)?;
    counter.counted.connect(|value| println!("counted {value}"));
    if !counter.is_running() {
        counter.start();
    }

    while counter.frame(Instant::now()) {
        println!("{}", render(&counter.columns()));
        std::thread::sleep(FRAME);
    }
    Ok(())
}

/// Most significant wheel first.
fn render(columns: &[ColumnTransition]) -> String {
    columns
        .iter()
        .rev()
        .map(|column| match column.resting_digit() {
            Some(digit) => format!("[ {digit} ]"),
            None => format!("[{}/{}]", column.upper_digit, column.lower_digit),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
