//! Lexical scope chain for the evaluator.
//!
//! A frame is shared through `Rc<RefCell<_>>`: the scope that created it and
//! every closure defined inside it hold the same frame, so a closure sees
//! bindings added to its defining scope after the closure was created.
//! Frames are single-threaded by construction.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Object;

#[derive(Default)]
struct Scope {
    store: HashMap<String, Object>,
    outer: Option<Environment>,
}

/// A handle to one frame of the scope chain.
///
/// Cloning the handle shares the frame; it does not copy bindings.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates an empty global frame with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frame whose lookups fall back to `outer`.
    ///
    /// Used for every function call, with the function's captured
    /// environment as `outer`.
    #[must_use]
    pub fn new_enclosed(outer: &Self) -> Self {
        Self(Rc::new(RefCell::new(Scope { store: HashMap::new(),
                                          outer: Some(outer.clone()), })))
    }

    /// Looks `name` up in this frame, then in each enclosing frame in turn.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        let scope = self.0.borrow();
        match scope.store.get(name) {
            Some(value) => Some(value.clone()),
            None => scope.outer.as_ref()?.get(name),
        }
    }

    /// Binds `name` in this frame, replacing any previous binding here.
    ///
    /// Enclosing frames are never written, so a parameter or local shadows an
    /// outer binding without changing it.
    pub fn set(&self, name: &str, value: Object) {
        self.0.borrow_mut().store.insert(name.to_owned(), value);
    }
}

// Frames can reach themselves through a stored closure, so only names are
// printed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names = scope.store.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("has_outer", &scope.outer.is_some())
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_outward() {
        let global = Environment::new();
        global.set("x", Object::Integer(1));
        let inner = Environment::new_enclosed(&global);

        assert_eq!(inner.get("x"), Some(Object::Integer(1)));
        assert_eq!(inner.get("y"), None);
        assert_eq!(format!("{inner:?}"), r#"Environment { names: [], has_outer: true }"#);
    }

    #[test]
    fn set_shadows_without_touching_the_parent() {
        let global = Environment::new();
        global.set("x", Object::Integer(1));
        let inner = Environment::new_enclosed(&global);
        inner.set("x", Object::Integer(2));

        assert_eq!(inner.get("x"), Some(Object::Integer(2)));
        assert_eq!(global.get("x"), Some(Object::Integer(1)));
    }

    #[test]
    fn last_write_wins() {
        let env = Environment::new();
        env.set("x", Object::Integer(1));
        env.set("x", Object::Integer(2));

        assert_eq!(env.get("x"), Some(Object::Integer(2)));
    }

    #[test]
    fn children_see_later_parent_bindings() {
        let global = Environment::new();
        let inner = Environment::new_enclosed(&global);
        global.set("late", Object::Integer(9));

        assert_eq!(inner.get("late"), Some(Object::Integer(9)));
    }

    #[test]
    fn debug_lists_names_only() {
        let env = Environment::new();
        env.set("b", Object::Integer(1));
        env.set("a", Object::Integer(2));

        assert_eq!(format!("{env:?}"), r#"Environment { names: ["a", "b"], has_outer: false }"#);
    }
}
