//! Behavioral patterns: Strategy, Command, Observer.

pub mod command;
pub mod observer;
pub mod strategy;
