// Pattern 4: Composition - Strategy, Decorator and Command sharing one core
// A context holds a capability, wrappers decorate it, and rebinding swaps it.
//
// Run with: cargo run --bin p4_composition

use colored::Colorize;

use design_patterns::behavioral::command::{Light, TurnOffCommand, TurnOnCommand};
use design_patterns::behavioral::strategy::{AddStrategy, MultiplyStrategy, Operands};
use design_patterns::chain::ChainSpec;
use design_patterns::composition::{Capability, Context, Invoker, Layer, Wrapper};
use design_patterns::structural::decorator::BracketLayer;
use design_patterns::{logging, PatternError, Result};

const CHAIN: &str = include_str!("../../demos/chain.toml");

const CYCLIC_CHAIN: &str = r#"
root = "left"

[[node]]
name = "left"
kind = "decorated"
inner = "right"

[[node]]
name = "right"
kind = "decorated"
inner = "left"
"#;

/// Swaps the operands before the strategy sees them.
struct SwapOperands;

impl Layer<Operands, i64> for SwapOperands {
    fn before(&self, Operands(a, b): Operands) -> Result<Operands> {
        Ok(Operands(b, a))
    }
}

/// Doubles whatever the strategy returns.
struct Doubled;

impl Layer<Operands, i64> for Doubled {
    fn after(&self, output: i64) -> Result<i64> {
        output
            .checked_mul(2)
            .ok_or_else(|| PatternError::behavior("Doubled", "result overflows i64"))
    }
}

// ============================================================================
// Example: Decorated strategies behind one context
// ============================================================================

fn strategy_composition_example() -> Result<()> {
    let mut context = Context::new(AddStrategy);
    println!("add(5, 3) = {}", context.run(Operands(5, 3))?);

    context.rebind(Wrapper::new(Doubled, MultiplyStrategy));
    println!("doubled(multiply(5, 3)) = {}", context.run(Operands(5, 3))?);

    context.rebind(Wrapper::new(Doubled, Wrapper::new(SwapOperands, AddStrategy)));
    println!("doubled(swap(add(5, 3))) = {}", context.run(Operands(5, 3))?);
    Ok(())
}

// ============================================================================
// Example: Decorated commands behind one invoker
// ============================================================================

fn command_composition_example() -> Result<()> {
    let light = Light::shared();
    let mut invoker = Invoker::new(Wrapper::new(
        BracketLayer::new("[on]  ", ""),
        TurnOnCommand::new(light.clone()),
    ));
    println!("{}", invoker.run(())?);

    invoker.rebind(Wrapper::new(
        BracketLayer::new("[off] ", ""),
        TurnOffCommand::new(light.clone()),
    ));
    println!("{}", invoker.run(())?);
    println!("Light ends on: {}", light.borrow().is_on());
    Ok(())
}

// ============================================================================
// Example: Chains described in TOML
// ============================================================================

fn described_chain_example() -> Result<()> {
    let chain = ChainSpec::from_toml_str(CHAIN)?.assemble()?;
    println!("{} (depth {})", chain.perform(())?, chain.depth());

    match ChainSpec::from_toml_str(CYCLIC_CHAIN)?.assemble() {
        Ok(_) => println!("Cyclic chain was accepted"),
        Err(err) => println!("Rejected: {}", err.to_string().red()),
    }
    Ok(())
}

fn main() -> Result<()> {
    logging::init();

    println!("{}", "Pattern 4: Composition".bold());
    println!("=======================\n");

    println!("{}", "=== Decorated Strategies ===".cyan());
    strategy_composition_example()?;
    println!();

    println!("{}", "=== Decorated Commands ===".cyan());
    command_composition_example()?;
    println!();

    println!("{}", "=== Described Chains ===".cyan());
    described_chain_example()?;
    Ok(())
}
