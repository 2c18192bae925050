// Strategy Pattern - interchangeable algorithms behind one context.
// Arithmetic strategies for a calculator and archive strategies for a compressor.

use crate::composition::{Capability, Context};
use crate::error::{PatternError, Result};

// ============================================================================
// Arithmetic strategies
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands(pub i64, pub i64);

impl From<(i64, i64)> for Operands {
    fn from((a, b): (i64, i64)) -> Self {
        Operands(a, b)
    }
}

fn overflow(strategy: &str, Operands(a, b): Operands) -> PatternError {
    PatternError::behavior(strategy, format!("{} and {} overflow i64", a, b))
}

pub struct AddStrategy;

impl Capability<Operands, i64> for AddStrategy {
    fn perform(&self, input: Operands) -> Result<i64> {
        input.0.checked_add(input.1).ok_or_else(|| overflow("AddStrategy", input))
    }
}

pub struct SubtractStrategy;

impl Capability<Operands, i64> for SubtractStrategy {
    fn perform(&self, input: Operands) -> Result<i64> {
        input
            .0
            .checked_sub(input.1)
            .ok_or_else(|| overflow("SubtractStrategy", input))
    }
}

pub struct MultiplyStrategy;

impl Capability<Operands, i64> for MultiplyStrategy {
    fn perform(&self, input: Operands) -> Result<i64> {
        input
            .0
            .checked_mul(input.1)
            .ok_or_else(|| overflow("MultiplyStrategy", input))
    }
}

pub struct DivideStrategy;

impl Capability<Operands, i64> for DivideStrategy {
    fn perform(&self, input: Operands) -> Result<i64> {
        if input.1 == 0 {
            return Err(PatternError::behavior("DivideStrategy", "division by zero"));
        }
        input
            .0
            .checked_div(input.1)
            .ok_or_else(|| overflow("DivideStrategy", input))
    }
}

/// The calculator never knows which arithmetic it runs.
pub struct Calculator {
    context: Context<Operands, i64>,
}

impl Calculator {
    pub fn new(strategy: impl Capability<Operands, i64> + 'static) -> Self {
        Self {
            context: Context::new(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: impl Capability<Operands, i64> + 'static) {
        self.context.rebind(strategy);
    }

    pub fn execute_strategy(&self, a: i64, b: i64) -> Result<i64> {
        self.context.run((a, b).into())
    }

    pub fn strategy_name(&self) -> Option<&str> {
        self.context.bound_name()
    }
}

// ============================================================================
// Compression strategies
// ============================================================================

fn archive_name(strategy: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PatternError::behavior(strategy, "archive name is empty"));
    }
    Ok(())
}

pub struct ZipCompression;

impl Capability<String, String> for ZipCompression {
    fn perform(&self, name: String) -> Result<String> {
        archive_name("ZipCompression", &name)?;
        Ok(format!(
            "Folder is compressed using zip approach: '{}.zip' file is created",
            name
        ))
    }
}

pub struct RarCompression;

impl Capability<String, String> for RarCompression {
    fn perform(&self, name: String) -> Result<String> {
        archive_name("RarCompression", &name)?;
        Ok(format!(
            "Folder is compressed using Rar approach: '{}.rar' file is created",
            name
        ))
    }
}

pub struct CompressionContext {
    context: Context<String, String>,
}

impl CompressionContext {
    pub fn new(compression: impl Capability<String, String> + 'static) -> Self {
        Self {
            context: Context::new(compression),
        }
    }

    pub fn set_strategy(&mut self, compression: impl Capability<String, String> + 'static) {
        self.context.rebind(compression);
    }

    pub fn create_archive(&self, name: &str) -> Result<String> {
        self.context.run(name.to_string())
    }
}
