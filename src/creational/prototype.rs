// Prototype Pattern - produce new objects by duplicating an existing one.
//
// `duplicate` lists every field it copies instead of deriving `Clone`, so the
// copy contract stays visible: `id` is copied by value, `data` gets its own
// heap buffer, nothing is shared with the original.

use std::fmt;

pub trait Prototype {
    fn duplicate(&self) -> Self
    where
        Self: Sized;
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConcretePrototype {
    pub id: u32,
    pub data: String,
}

impl ConcretePrototype {
    pub fn new(id: u32, data: impl Into<String>) -> Self {
        Self {
            id,
            data: data.into(),
        }
    }
}

impl Prototype for ConcretePrototype {
    fn duplicate(&self) -> Self {
        ConcretePrototype {
            id: self.id,
            data: self.data.clone(),
        }
    }
}

impl fmt::Display for ConcretePrototype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Id {}, Data {}", self.id, self.data)
    }
}
