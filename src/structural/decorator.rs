// Decorator Pattern - wrap a component to add behaviour without touching it.
// Components produce a description; layers rewrite it on the way out.

use crate::composition::{Capability, Layer, Wrapper};
use crate::error::Result;

pub struct ConcreteComponent;

impl Capability<(), String> for ConcreteComponent {
    fn perform(&self, _input: ()) -> Result<String> {
        Ok("Concrete Component".to_string())
    }
}

/// A component whose description is chosen at construction.
pub struct TextComponent {
    text: String,
}

impl TextComponent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Capability<(), String> for TextComponent {
    fn perform(&self, _input: ()) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// `x` -> `Decorated(x)`
pub struct DecoratedLayer;

impl Layer<(), String> for DecoratedLayer {
    fn after(&self, output: String) -> Result<String> {
        Ok(format!("Decorated({})", output))
    }
}

pub type ConcreteDecorator<C> = Wrapper<DecoratedLayer, C>;

impl<C: Capability<(), String>> Wrapper<DecoratedLayer, C> {
    pub fn decorate(inner: C) -> Self {
        Wrapper::new(DecoratedLayer, inner)
    }
}

/// Surrounds the inner description with arbitrary text.
pub struct BracketLayer {
    prefix: String,
    suffix: String,
}

impl BracketLayer {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl Layer<(), String> for BracketLayer {
    fn after(&self, output: String) -> Result<String> {
        Ok(format!("{}{}{}", self.prefix, output, self.suffix))
    }
}

pub struct UppercaseLayer;

impl Layer<(), String> for UppercaseLayer {
    fn after(&self, output: String) -> Result<String> {
        Ok(output.to_uppercase())
    }
}
