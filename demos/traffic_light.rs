//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Handlers announcing each new light
//! - Illegal moves rejected without changing state
//!
//! Run with: cargo run --example traffic_light

use fsm_blueprint::core::State;
use fsm_blueprint::{state_enum, Blueprint, BuildError, Machine};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

fn announce(machine: &mut Machine<TrafficLight>) {
    println!("  light is now {}", machine.current_state().name());
}

fn main() -> Result<(), BuildError> {
    println!("=== Traffic Light State Machine ===\n");

    let mut blueprint = Blueprint::new();
    blueprint.start(TrafficLight::Red);
    blueprint
        .from(TrafficLight::Red)
        .to(TrafficLight::Green)?
        .then(announce);
    blueprint
        .from(TrafficLight::Green)
        .to(TrafficLight::Yellow)?
        .then(announce);
    blueprint
        .from(TrafficLight::Yellow)
        .to(TrafficLight::Red)?
        .then(announce);

    print!("Transitions: ");
    blueprint.print();

    let mut machine = blueprint.machine()?;
    println!("Initial state: {:?}\n", machine.current_state());

    println!("Two full cycles:");
    for _ in 0..2 {
        for next in [TrafficLight::Green, TrafficLight::Yellow, TrafficLight::Red] {
            if let Err(err) = machine.goto(next) {
                println!("  unexpected: {err}");
            }
        }
    }

    println!("\nSkipping yellow:");
    machine.goto(TrafficLight::Green).ok();
    match machine.goto(TrafficLight::Red) {
        Ok(()) => println!("  went straight to red?"),
        Err(err) => println!("  rejected: {err}"),
    }
    println!("  still {:?}", machine.current_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
