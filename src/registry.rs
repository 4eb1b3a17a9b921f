//! Named-transform dispatch for callers that cannot construct closures.
//!
//! A [`TransformRegistry`] resolves a name to a transformation over
//! dynamic [`Value`]s. Once resolved, the behavior is identical to
//! passing the function value directly to
//! [`map`](crate::sequence::map); the registry adds a lookup, nothing
//! else.

use rustc_hash::FxHashMap;

use crate::error::TransformError;
use crate::sequence;
use crate::value::Value;

/// A boxed transformation over dynamic values.
pub type DynTransform = Box<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// A registry of named transformations over [`Value`]s.
///
/// # Examples
///
/// ```rust
/// use imago::registry::TransformRegistry;
/// use imago::value::{Scalar, Value};
///
/// let mut registry = TransformRegistry::new();
/// registry.register("double", |value| match value {
///     Value::Scalar(Scalar::Int(n)) => Some(Value::from(n * 2)),
///     _ => None,
/// });
///
/// let image = registry.map_named("double", vec![Value::from(2), Value::from(3)]);
/// assert_eq!(image, Ok(vec![Value::from(4), Value::from(6)]));
/// ```
#[derive(Default)]
pub struct TransformRegistry {
    entries: FxHashMap<String, DynTransform>,
}

impl TransformRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a transformation under `name`, replacing any previous
    /// entry with that name.
    pub fn register<F>(&mut self, name: impl Into<String>, transform: F)
    where
        F: Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Box::new(transform));
    }

    /// Resolves a name to its registered transformation.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&DynTransform> {
        self.entries.get(name)
    }

    /// Returns the number of registered transformations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no transformation is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maps the named transformation over a sequence.
    ///
    /// Behaviorally identical to [`sequence::map`] with the resolved
    /// function, including the all-or-nothing nil propagation.
    ///
    /// # Errors
    ///
    /// - [`TransformError::UnknownTransform`] if `name` is not
    ///   registered.
    /// - [`TransformError::MissingImage`] if the transformation produces
    ///   no image for some element.
    pub fn map_named(
        &self,
        name: &str,
        preimage: Vec<Value>,
    ) -> Result<Vec<Value>, TransformError> {
        let transform = self
            .resolve(name)
            .ok_or_else(|| TransformError::UnknownTransform {
                name: name.to_string(),
            })?;
        sequence::map(|value| transform(&value), preimage)
    }
}

// =============================================================================
// Tests
// =============================================================================
