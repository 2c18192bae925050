// Pattern 1: Creational Patterns - Builder, Factory Method, Prototype, Singleton
// Demonstrates object creation patterns.
//
// Run with: cargo run --bin p1_creational

use colored::Colorize;

use design_patterns::creational::builder::CarBuilder;
use design_patterns::creational::factory::{BikeFactory, VehicleFactory, VehicleKind};
use design_patterns::creational::prototype::{ConcretePrototype, Prototype};
use design_patterns::creational::singleton::Singleton;
use design_patterns::{logging, Result};

// ============================================================================
// Example: Builder Pattern
// ============================================================================

fn builder_example() -> Result<()> {
    let car = CarBuilder::new()
        .tires("Michelin")
        .seats("Leather")
        .engine("Engine")
        .build()?;
    println!("{}", car);

    // Forgetting a part is an error, not a half-built car.
    match CarBuilder::new().engine("Engine").build() {
        Ok(car) => println!("Unexpectedly built: {}", car),
        Err(err) => println!("Incomplete builder: {}", err),
    }
    Ok(())
}

// ============================================================================
// Example: Factory Method
// ============================================================================

fn factory_example() -> Result<()> {
    let factory: Box<dyn VehicleFactory> = Box::new(BikeFactory);
    println!("{}", factory.create_vehicle().drive());

    let kind: VehicleKind = "car".parse()?;
    println!("{} factory: {}", kind, kind.factory().create_vehicle().drive());
    Ok(())
}

// ============================================================================
// Example: Prototype Pattern
// ============================================================================

fn prototype_example() {
    let original = ConcretePrototype::new(1, "Proto");
    let mut clone = original.duplicate();
    clone.id = 2;

    println!("{}", original);
    println!("{}", clone);
}

// ============================================================================
// Example: Singleton Pattern
// ============================================================================

fn singleton_example() {
    let first = Singleton::instance();
    let second = Singleton::instance();
    println!("{}", second.do_something());
    println!("Same instance: {}", std::ptr::eq(first, second));
}

fn main() -> Result<()> {
    logging::init();

    println!("{}", "Pattern 1: Creational Patterns".bold());
    println!("===============================\n");

    println!("{}", "=== Builder Pattern ===".cyan());
    builder_example()?;
    println!();

    println!("{}", "=== Factory Method ===".cyan());
    factory_example()?;
    println!();

    println!("{}", "=== Prototype Pattern ===".cyan());
    prototype_example();
    println!();

    println!("{}", "=== Singleton Pattern ===".cyan());
    singleton_example();
    Ok(())
}
