//! # Design Patterns Catalog
//!
//! Classic object-oriented patterns expressed with traits and ownership
//! instead of base classes. The behavioral and structural examples share one
//! small core:
//!
//! - [`Capability`](composition::Capability) - the single-method contract
//!   (`perform(input) -> Result<output>`) every interchangeable behaviour
//!   implements
//! - [`Context`](composition::Context) - holds one capability, delegates `run` to it
//!   and can be rebound at runtime (Strategy context, Command invoker)
//! - [`Wrapper`](composition::Wrapper) - a [`Layer`](composition::Layer) around exactly one
//!   inner capability, stackable to any depth (Decorator)
//!
//! ## Pattern 1: Creational Patterns
//! - Builder (consuming fluent setters, validated `build`)
//! - Factory Method (factory trait objects, enum selection)
//! - Prototype (explicit field-by-field duplication)
//! - Singleton (`OnceLock`, creation counter)
//!
//! ## Pattern 2: Structural Patterns
//! - Decorator (layers over components, TOML-described chains)
//! - Adapter (legacy component behind `Capability`)
//! - Facade (one call sequencing two subsystems)
//!
//! ## Pattern 3: Behavioral Patterns
//! - Strategy (arithmetic and compression strategies)
//! - Command (light switch commands, remote control, macros)
//! - Observer (attach, detach, notify)
//!
//! Run the drivers with:
//! ```bash
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural
//! cargo run --bin p3_behavioral
//! cargo run --bin p4_composition
//! ```

pub mod behavioral;
pub mod chain;
pub mod composition;
pub mod creational;
pub mod error;
pub mod logging;
pub mod structural;

pub use error::{PatternError, Result};
