//! Behavior Composition Core: the capability contract, the rebindable
//! context that delegates to it and the wrapper chain that decorates it.

pub mod capability;
pub mod context;
pub mod wrapper;

pub use capability::{from_fn, Capability, FnCapability};
pub use context::{Context, Invoker};
pub use wrapper::{Layer, Stack, Wrapper};
