// Pattern 3: Behavioral Patterns - Strategy, Command, Observer
// Demonstrates patterns for swapping and dispatching behaviour at runtime.
//
// Run with: cargo run --bin p3_behavioral

use std::rc::Rc;

use colored::Colorize;

use design_patterns::behavioral::command::{
    Light, MacroCommand, RemoteControl, TurnOffCommand, TurnOnCommand,
};
use design_patterns::behavioral::observer::{ConcreteObserver, Subject};
use design_patterns::behavioral::strategy::{
    AddStrategy, Calculator, CompressionContext, DivideStrategy, MultiplyStrategy,
    RarCompression, ZipCompression,
};
use design_patterns::composition::Capability;
use design_patterns::{logging, Result};

// ============================================================================
// Example: Strategy Pattern
// ============================================================================

fn strategy_example() -> Result<()> {
    let mut calculator = Calculator::new(AddStrategy);
    println!("Add: {}", calculator.execute_strategy(5, 3)?);

    calculator.set_strategy(MultiplyStrategy);
    println!("Multiply: {}", calculator.execute_strategy(5, 3)?);

    calculator.set_strategy(DivideStrategy);
    match calculator.execute_strategy(5, 0) {
        Ok(value) => println!("Divide: {}", value),
        Err(err) => println!("Divide: {}", err.to_string().red()),
    }

    let mut compressor = CompressionContext::new(ZipCompression);
    println!("{}", compressor.create_archive("DocumentsFolder")?);
    compressor.set_strategy(RarCompression);
    println!("{}", compressor.create_archive("DocumentsFolder")?);
    Ok(())
}

// ============================================================================
// Example: Command Pattern
// ============================================================================

fn command_example() -> Result<()> {
    let light = Light::shared();
    let turn_on = TurnOnCommand::new(light.clone());
    let turn_off = TurnOffCommand::new(light.clone());

    println!("{}", turn_on.perform(())?);
    println!("{}", turn_off.perform(())?);

    let mut remote = RemoteControl::with_command(turn_on);
    println!("Remote: {}", remote.press_button()?);
    remote.set_command(
        MacroCommand::new()
            .then(turn_off)
            .then(TurnOnCommand::new(light.clone()))
            .then(TurnOffCommand::new(light.clone())),
    );
    for line in remote.press_button()?.lines() {
        println!("Macro: {}", line);
    }

    let light = light.borrow();
    println!("Light is on: {} after {} switches", light.is_on(), light.switches());
    Ok(())
}

// ============================================================================
// Example: Observer Pattern
// ============================================================================

fn observer_example() {
    let mut subject = Subject::new();
    let observer = Rc::new(ConcreteObserver::new());
    let id = subject.attach(observer.clone());

    for report in subject.notify() {
        println!("{}", report);
    }

    subject.detach(id);
    subject.notify();
    println!("Notified {} time(s)", observer.times_notified());
}

fn main() -> Result<()> {
    logging::init();

    println!("{}", "Pattern 3: Behavioral Patterns".bold());
    println!("===============================\n");

    println!("{}", "=== Strategy Pattern ===".cyan());
    strategy_example()?;
    println!();

    println!("{}", "=== Command Pattern ===".cyan());
    command_example()?;
    println!();

    println!("{}", "=== Observer Pattern ===".cyan());
    observer_example();
    Ok(())
}
