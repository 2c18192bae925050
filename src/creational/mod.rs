//! Creational patterns: Builder, Factory Method, Prototype, Singleton.

pub mod builder;
pub mod factory;
pub mod prototype;
pub mod singleton;
