// Facade Pattern - one call that sequences several independent subsystems.

use tracing::debug;

pub struct SubsystemA;

impl SubsystemA {
    pub fn operation_a(&self) -> String {
        "Subsystem A operation.".to_string()
    }
}

pub struct SubsystemB;

impl SubsystemB {
    pub fn operation_b(&self) -> String {
        "Subsystem B operation.".to_string()
    }
}

pub struct Facade {
    subsystem_a: SubsystemA,
    subsystem_b: SubsystemB,
}

impl Facade {
    pub fn new() -> Self {
        Self {
            subsystem_a: SubsystemA,
            subsystem_b: SubsystemB,
        }
    }

    /// Runs A then B and returns what each reported, in that order.
    pub fn perform_operations(&self) -> Vec<String> {
        debug!("facade sequencing subsystems");
        vec![
            self.subsystem_a.operation_a(),
            self.subsystem_b.operation_b(),
        ]
    }
}

impl Default for Facade {
    fn default() -> Self {
        Self::new()
    }
}
