//! Decorator chains.
//!
//! A [`Wrapper`] pairs one [`Layer`] with exactly one inner capability and is
//! itself a capability, so wrappers stack to any depth. For a chain
//! `outer(middle(base))` a call runs
//!
//! ```text
//! outer.before -> middle.before -> base.perform -> middle.after -> outer.after
//! ```
//!
//! The inner capability is moved in at construction and never replaced, so a
//! chain cannot be edited or made to wrap itself. To change composition,
//! build a new chain.

use std::marker::PhantomData;

use tracing::debug;

use super::capability::{short_type_name, Capability};
use crate::error::Result;

/// The part of a decorator that is not delegation: optional pre-processing
/// of the input and post-processing of the inner result.
pub trait Layer<I, O> {
    fn before(&self, input: I) -> Result<I> {
        Ok(input)
    }

    fn after(&self, output: O) -> Result<O> {
        Ok(output)
    }

    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<I, O, L: Layer<I, O> + ?Sized> Layer<I, O> for Box<L> {
    fn before(&self, input: I) -> Result<I> {
        (**self).before(input)
    }

    fn after(&self, output: O) -> Result<O> {
        (**self).after(output)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub struct Wrapper<L, C> {
    layer: L,
    inner: C,
}

impl<L, C> Wrapper<L, C> {
    pub fn new(layer: L, inner: C) -> Self {
        Self { layer, inner }
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<I, O, L, C> Capability<I, O> for Wrapper<L, C>
where
    L: Layer<I, O>,
    C: Capability<I, O>,
{
    fn perform(&self, input: I) -> Result<O> {
        let input = self.layer.before(input)?;
        let output = self.inner.perform(input)?;
        self.layer.after(output)
    }

    fn name(&self) -> &str {
        self.layer.name()
    }

    fn depth(&self) -> usize {
        self.inner.depth() + 1
    }
}

/// Builds a chain bottom-up; each `layer` call wraps everything added so far.
///
/// ```ignore
/// let chain = Stack::on(ConcreteComponent)
///     .layer(DecoratedLayer)   // innermost
///     .layer(UppercaseLayer)   // outermost
///     .build();
/// ```
pub struct Stack<I, O, C> {
    top: C,
    _io: PhantomData<fn(I) -> O>,
}

impl<I, O, C: Capability<I, O>> Stack<I, O, C> {
    pub fn on(base: C) -> Self {
        Self {
            top: base,
            _io: PhantomData,
        }
    }

    pub fn layer<L: Layer<I, O>>(self, layer: L) -> Stack<I, O, Wrapper<L, C>> {
        debug!(
            layer = layer.name(),
            around = self.top.name(),
            depth = self.top.depth() + 1,
            "wrapping"
        );
        Stack {
            top: Wrapper::new(layer, self.top),
            _io: PhantomData,
        }
    }

    pub fn build(self) -> C {
        self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::capability::from_fn;
    use crate::error::PatternError;

    struct Suffix(&'static str);

    impl Layer<(), String> for Suffix {
        fn after(&self, output: String) -> Result<String> {
            Ok(format!("{}{}", output, self.0))
        }
    }

    struct AddBefore(i64);

    impl Layer<i64, i64> for AddBefore {
        fn before(&self, input: i64) -> Result<i64> {
            Ok(input + self.0)
        }
    }

    struct Reject;

    impl Layer<(), String> for Reject {
        fn before(&self, _input: ()) -> Result<()> {
            Err(PatternError::behavior("Reject", "refused"))
        }
    }

    fn base() -> impl Capability<(), String> {
        from_fn("base", |_: ()| Ok("base".to_string()))
    }

    #[test]
    fn test_single_wrapper() {
        let wrapped = Wrapper::new(Suffix("!"), base());
        assert_eq!(wrapped.perform(()).unwrap(), "base!");
        assert_eq!(wrapped.depth(), 1);
        assert_eq!(wrapped.name(), "Suffix");
    }

    #[test]
    fn test_post_processing_runs_inner_to_outer() {
        let chain = Stack::on(base()).layer(Suffix("-a")).layer(Suffix("-b")).build();
        assert_eq!(chain.perform(()).unwrap(), "base-a-b");
        assert_eq!(chain.depth(), 2);
    }

    #[test]
    fn test_pre_processing_reaches_inner() {
        let double = from_fn("double", |x: i64| Ok(x * 2));
        let chain = Wrapper::new(AddBefore(1), Wrapper::new(AddBefore(2), double));
        // (5 + 1 + 2) * 2
        assert_eq!(chain.perform(5).unwrap(), 16);
    }

    #[test]
    fn test_error_short_circuits() {
        let chain = Wrapper::new(Suffix("!"), Wrapper::new(Reject, base()));
        assert!(matches!(
            chain.perform(()),
            Err(PatternError::Behavior { .. })
        ));
    }

    #[test]
    fn test_boxed_layers_compose() {
        let layers: Vec<Box<dyn Layer<(), String>>> =
            vec![Box::new(Suffix("1")), Box::new(Suffix("2"))];
        let mut chain: Box<dyn Capability<(), String>> = Box::new(base());
        for layer in layers {
            chain = Box::new(Wrapper::new(layer, chain));
        }
        assert_eq!(chain.perform(()).unwrap(), "base12");
        assert_eq!(chain.depth(), 2);
    }
}
