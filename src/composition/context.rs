//! The holder of a rebindable capability.
//!
//! `Context` is the Strategy pattern's context and the Command pattern's
//! invoker at once: it owns one boxed [`Capability`], forwards every `run`
//! to it and lets its owner swap the binding at any time.
//!
//! ## Threads
//!
//! A `Context` is neither `Send` nor `Sync`. `rebind` takes `&mut self` and
//! `run` takes `&self`, so within one thread the borrow checker already
//! guarantees a rebind never lands while a run is in progress. Sharing a
//! context across threads requires the caller to wrap it in its own lock.

use tracing::{debug, warn};

use super::capability::Capability;
use crate::error::{PatternError, Result};

pub struct Context<I, O> {
    bound: Option<Box<dyn Capability<I, O>>>,
}

/// A context whose capabilities take no input: the Command invoker.
pub type Invoker<O> = Context<(), O>;

impl<I, O> Context<I, O> {
    pub fn new(initial: impl Capability<I, O> + 'static) -> Self {
        let initial: Box<dyn Capability<I, O>> = Box::new(initial);
        debug!(capability = initial.name(), "context bound");
        Self {
            bound: Some(initial),
        }
    }

    /// A context with nothing bound yet. `run` fails until `rebind` is called.
    pub fn unbound() -> Self {
        Self { bound: None }
    }

    /// Replace the bound capability, handing back the previous one.
    pub fn rebind(
        &mut self,
        next: impl Capability<I, O> + 'static,
    ) -> Option<Box<dyn Capability<I, O>>> {
        let next: Box<dyn Capability<I, O>> = Box::new(next);
        debug!(
            from = self.bound_name().unwrap_or("<unbound>"),
            to = next.name(),
            "context rebound"
        );
        self.bound.replace(next)
    }

    /// Delegate to the bound capability. Results and errors pass through unchanged.
    pub fn run(&self, input: I) -> Result<O> {
        match &self.bound {
            Some(capability) => {
                debug!(capability = capability.name(), "running");
                capability.perform(input)
            }
            None => {
                warn!("run called on an unbound context");
                Err(PatternError::UnboundCapability)
            }
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub fn bound_name(&self) -> Option<&str> {
        self.bound.as_ref().map(|capability| capability.name())
    }
}

impl<I, O> Default for Context<I, O> {
    fn default() -> Self {
        Self::unbound()
    }
}
