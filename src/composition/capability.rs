//! The one-method contract every interchangeable behaviour implements.

use std::rc::Rc;

use crate::error::Result;

/// A behaviour that turns an `I` into an `O`, or fails.
///
/// Strategies, commands, decorated components and adapters all implement
/// this trait, so a [`Context`](crate::composition::Context) can hold any of them
/// without knowing which one it has.
pub trait Capability<I, O> {
    fn perform(&self, input: I) -> Result<O>;

    /// Short label used in logs and driver output.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Number of wrapper layers stacked above the terminal behaviour.
    fn depth(&self) -> usize {
        0
    }
}

// `design_patterns::behavioral::strategy::AddStrategy` -> `AddStrategy`
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl<I, O, C: Capability<I, O> + ?Sized> Capability<I, O> for Box<C> {
    fn perform(&self, input: I) -> Result<O> {
        (**self).perform(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}

impl<I, O, C: Capability<I, O> + ?Sized> Capability<I, O> for Rc<C> {
    fn perform(&self, input: I) -> Result<O> {
        (**self).perform(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}

impl<I, O, C: Capability<I, O> + ?Sized> Capability<I, O> for &C {
    fn perform(&self, input: I) -> Result<O> {
        (**self).perform(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}

/// Closure-backed capability, the functional flavour of a strategy.
pub struct FnCapability<F> {
    name: String,
    f: F,
}

impl<I, O, F> Capability<I, O> for FnCapability<F>
where
    F: Fn(I) -> Result<O>,
{
    fn perform(&self, input: I) -> Result<O> {
        (self.f)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wrap a closure so it can be bound anywhere a [`Capability`] is expected.
pub fn from_fn<I, O, F>(name: impl Into<String>, f: F) -> FnCapability<F>
where
    F: Fn(I) -> Result<O>,
{
    FnCapability {
        name: name.into(),
        f,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    struct Echo;

    impl Capability<String, String> for Echo {
        fn perform(&self, input: String) -> Result<String> {
            Ok(input)
        }
    }

    #[test]
    fn test_default_name_is_short() {
        assert_eq!(Echo.name(), "Echo");
    }

    #[test]
    fn test_short_type_name_strips_generics() {
        assert_eq!(short_type_name("a::b::Wrapper<x::Y, z::W>"), "Wrapper");
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn test_boxed_and_shared_forward() {
        let boxed: Box<dyn Capability<String, String>> = Box::new(Echo);
        assert_eq!(boxed.perform("hi".to_string()).unwrap(), "hi");
        assert_eq!(boxed.name(), "Echo");

        let shared = Rc::new(Echo);
        assert_eq!(shared.perform("there".to_string()).unwrap(), "there");
        assert_eq!(shared.depth(), 0);
    }

    #[test]
    fn test_closure_capability() {
        let double = from_fn("double", |x: i64| Ok(x * 2));
        assert_eq!(double.perform(21).unwrap(), 42);
        assert_eq!(Capability::<i64, i64>::name(&double), "double");
    }

    #[test]
    fn test_closure_error_passes_through() {
        let failing = from_fn("failing", |_: ()| -> Result<()> {
            Err(PatternError::behavior("failing", "always"))
        });
        assert!(matches!(
            failing.perform(()),
            Err(PatternError::Behavior { .. })
        ));
    }
}
