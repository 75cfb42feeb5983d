//! Turnstile
//!
//! A coin-operated turnstile loaded from a JSON definition, with lifecycle
//! hooks printing every step and an alarm state that traps all inputs.
//!
//! Key concepts:
//! - Declarative definitions by symbol name
//! - Exit, transition and entry hooks
//! - Handling rejected inputs without losing state
//!
//! Run with: cargo run --example turnstile

use tabula::{symbol_enum, MachineDefinition};

symbol_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
        Alarm,
    }
}

symbol_enum! {
    enum Event {
        Coin,
        Push,
        Force,
    }
}

const DEFINITION: &str = r#"{
    "start": "Locked",
    "accepting": ["Locked"],
    "edges": [
        { "from": "Locked",   "input": "Coin",  "to": "Unlocked" },
        { "from": "Locked",   "input": "Force", "to": "Alarm" },
        { "from": "Unlocked", "input": "Push",  "to": "Locked" },
        { "from": "Unlocked", "input": "Coin",  "to": "Unlocked" }
    ],
    "traps": ["Alarm"]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Turnstile ===\n");

    let mut machine = MachineDefinition::from_json(DEFINITION)?.build::<Turnstile, Event>()?;

    machine.set_exit_callback(|state| println!("  leaving  {state:?}"))?;
    machine.set_transition_callback(|from, event, to| {
        println!("  {from:?} --{event:?}--> {to:?}")
    })?;
    machine.set_entry_callback(|state| println!("  entering {state:?}"))?;

    for event in [Event::Coin, Event::Push, Event::Push, Event::Force, Event::Coin] {
        println!("{event:?}:");
        if let Err(err) = machine.process_input(event) {
            println!("  rejected: {err}");
        }
    }

    println!("\nFinal state: {:?}", machine.current_state());
    println!("At rest: {}", machine.is_accepting());

    println!("\n=== Example Complete ===");
    Ok(())
}
