//! Structural patterns: Decorator, Adapter, Facade.

pub mod adapter;
pub mod decorator;
pub mod facade;
