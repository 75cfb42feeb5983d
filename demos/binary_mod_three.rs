//! Binary Modulo Three
//!
//! Recognizes binary numbers divisible by three. Appending a bit `b` to a
//! number `n` yields `2n + b`, so three states tracking `n mod 3` suffice.
//!
//! Key concepts:
//! - Dense transition table over two small enums
//! - Accepting states
//! - Reset between runs
//!
//! Run with: RUST_LOG=tabula=trace cargo run --example binary_mod_three

use tabula::{symbol_enum, Error, MachineBuilder};

symbol_enum! {
    enum Remainder {
        A,
        B,
        C,
    }
}

symbol_enum! {
    enum Bit {
        Zero,
        One,
    }
}

fn parse(text: &str) -> Vec<Bit> {
    text.chars()
        .filter_map(|c| match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        })
        .collect()
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Binary Modulo Three ===\n");

    let mut machine = MachineBuilder::new()
        .start(Remainder::A)
        .accept(Remainder::A)
        .edge(Remainder::A, Bit::Zero, Remainder::A)
        .edge(Remainder::A, Bit::One, Remainder::B)
        .edge(Remainder::B, Bit::Zero, Remainder::C)
        .edge(Remainder::B, Bit::One, Remainder::A)
        .edge(Remainder::C, Bit::Zero, Remainder::B)
        .edge(Remainder::C, Bit::One, Remainder::C)
        .build()?;

    for n in 0u32..10 {
        let binary = format!("{n:b}");
        machine.process_all(parse(&binary))?;
        println!(
            "{n:>2} = {binary:>4}  ends in {:?}  divisible by 3: {}",
            machine.current_state(),
            machine.is_accepting()
        );
        machine.reset();
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
