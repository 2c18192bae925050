//! Error taxonomy shared by every pattern in the catalog.
//!
//! Errors are never recovered inside a chain. A failing behaviour surfaces
//! through each enclosing wrapper and the context untouched, so the variant
//! the caller sees is the variant the failing layer produced.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    /// `Context::run` was called while no capability was bound.
    #[error("no capability is bound to this context")]
    UnboundCapability,

    /// A described wrapper chain refers back to one of its own layers.
    #[error("wrapper chain is cyclic: {}", path.join(" -> "))]
    CyclicWrapper { path: Vec<String> },

    /// Failure inside a concrete behaviour's own action.
    #[error("{behavior} failed: {reason}")]
    Behavior { behavior: String, reason: String },

    #[error("chain refers to unknown node '{0}'")]
    UnknownNode(String),

    #[error("chain declares node '{0}' more than once")]
    DuplicateNode(String),

    #[error("node '{name}' is invalid: {reason}")]
    InvalidNode { name: String, reason: String },

    #[error("cannot build {product}: missing {part}")]
    MissingPart {
        product: &'static str,
        part: &'static str,
    },

    #[error("unknown vehicle kind '{0}'")]
    UnknownVehicle(String),

    #[error("failed to parse chain description: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PatternError {
    pub fn behavior(behavior: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Behavior {
            behavior: behavior.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_node(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNode {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
