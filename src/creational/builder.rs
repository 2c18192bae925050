// Builder Pattern - assemble a car part by part with a fluent API.

use std::fmt;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    engine: String,
    tires: String,
    seats: String,
}

impl Car {
    pub fn builder() -> CarBuilder {
        CarBuilder::new()
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn tires(&self) -> &str {
        &self.tires
    }

    pub fn seats(&self) -> &str {
        &self.seats
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Engine: {}, Tires: {}, Seats: {}",
            self.engine, self.tires, self.seats
        )
    }
}

#[derive(Debug, Default)]
#[must_use = "a builder does nothing until build() is called"]
pub struct CarBuilder {
    engine: Option<String>,
    tires: Option<String>,
    seats: Option<String>,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn tires(mut self, tires: impl Into<String>) -> Self {
        self.tires = Some(tires.into());
        self
    }

    pub fn seats(mut self, seats: impl Into<String>) -> Self {
        self.seats = Some(seats.into());
        self
    }

    /// Every part is required; the first missing one is reported.
    pub fn build(self) -> Result<Car> {
        Ok(Car {
            engine: self.engine.ok_or(PatternError::MissingPart {
                product: "car",
                part: "engine",
            })?,
            tires: self.tires.ok_or(PatternError::MissingPart {
                product: "car",
                part: "tires",
            })?,
            seats: self.seats.ok_or(PatternError::MissingPart {
                product: "car",
                part: "seats",
            })?,
        })
    }
}
