// Pattern 2: Structural Patterns - Decorator, Adapter, Facade
// Demonstrates patterns that compose or translate existing components.
//
// Run with: cargo run --bin p2_structural

use colored::Colorize;

use design_patterns::composition::{Capability, Stack};
use design_patterns::structural::adapter::Adapter;
use design_patterns::structural::decorator::{
    BracketLayer, ConcreteComponent, ConcreteDecorator, UppercaseLayer,
};
use design_patterns::structural::facade::Facade;
use design_patterns::{logging, Result};

// ============================================================================
// Example: Decorator Pattern
// ============================================================================

fn decorator_example() -> Result<()> {
    let component = ConcreteDecorator::decorate(ConcreteComponent);
    println!("{}", component.perform(())?);

    let twice = ConcreteDecorator::decorate(ConcreteDecorator::decorate(ConcreteComponent));
    println!("{} (depth {})", twice.perform(())?, twice.depth());

    // Layers added later sit further out.
    let stacked = Stack::on(ConcreteComponent)
        .layer(BracketLayer::new("[", "]"))
        .layer(UppercaseLayer)
        .build();
    println!("{}", stacked.perform(())?);
    Ok(())
}

// ============================================================================
// Example: Adapter Pattern
// ============================================================================

fn adapter_example() -> Result<()> {
    let target: Box<dyn Capability<(), String>> = Box::new(Adapter::default());
    println!("{}", target.perform(())?);
    Ok(())
}

// ============================================================================
// Example: Facade Pattern
// ============================================================================

fn facade_example() {
    let facade = Facade::new();
    for line in facade.perform_operations() {
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    logging::init();

    println!("{}", "Pattern 2: Structural Patterns".bold());
    println!("===============================\n");

    println!("{}", "=== Decorator Pattern ===".cyan());
    decorator_example()?;
    println!();

    println!("{}", "=== Adapter Pattern ===".cyan());
    adapter_example()?;
    println!();

    println!("{}", "=== Facade Pattern ===".cyan());
    facade_example();
    Ok(())
}
