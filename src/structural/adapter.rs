// Adapter Pattern - give an existing component the interface callers expect.

use crate::composition::Capability;
use crate::error::Result;

/// Existing component with its own calling convention.
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        "Called SpecificRequest in Adaptee.".to_string()
    }
}

/// Translates `perform` into `Adaptee::specific_request`.
pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Default for Adapter {
    fn default() -> Self {
        Self::new(Adaptee)
    }
}

impl Capability<(), String> for Adapter {
    fn perform(&self, _input: ()) -> Result<String> {
        Ok(self.adaptee.specific_request())
    }
}
