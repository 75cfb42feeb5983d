//! Shared Table
//!
//! One frozen table driven by several threads, each with its own machine.
//! Only the table is shared; current state stays per machine.
//!
//! Run with: cargo run --example shared_table

use std::sync::Arc;
use std::thread;
use tabula::{symbol_enum, Machine, MachineBuilder};

symbol_enum! {
    enum Parity {
        Even,
        Odd,
    }
}

symbol_enum! {
    enum Bit {
        Zero,
        One,
    }
}

fn main() -> Result<(), tabula::Error> {
    println!("=== Shared Table ===\n");

    let template = MachineBuilder::new()
        .accept(Parity::Even)
        .edge(Parity::Even, Bit::Zero, Parity::Even)
        .edge(Parity::Even, Bit::One, Parity::Odd)
        .edge(Parity::Odd, Bit::Zero, Parity::Odd)
        .edge(Parity::Odd, Bit::One, Parity::Even)
        .build()?;
    let table = template.shared_table();

    let words = [0b1011u8, 0b1111, 0b0000, 0b1000_0001];
    let handles: Vec<_> = words
        .into_iter()
        .map(|word| {
            let table = Arc::clone(&table);
            thread::spawn(move || -> Result<(u8, bool), tabula::Error> {
                let mut machine = Machine::from_shared_table(table, Parity::Even, [Parity::Even])?;
                let bits = (0..8).map(|i| if word >> i & 1 == 1 { Bit::One } else { Bit::Zero });
                machine.process_all(bits)?;
                Ok((word, machine.is_accepting()))
            })
        })
        .collect();

    for handle in handles {
        let (word, even) = handle.join().expect("worker panicked")?;
        println!("{word:08b} has even parity: {even}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
