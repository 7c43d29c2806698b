// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, fmt::Debug, rc::Rc};

use log::trace;

use crate::{BuiltinFunction, Value};

/// One frame of variables, kept in definition order. A frame is shared
/// between the code running in it and every closure declared in it.
#[derive(Default)]
pub struct Environment {
    parent: Option<Rc<RefCell<Environment>>>,
    variables: Vec<(String, Value)>,
}

impl Environment {
    /// Creates the outermost frame, binding every built-in under its name and
    /// each of its aliases.
    #[must_use]
    pub fn new_global(builtins: &'static [BuiltinFunction]) -> Rc<RefCell<Self>> {
        let mut this = Self::default();

        for builtin in builtins {
            for name in builtin.names() {
                this.define(name, Value::Builtin(builtin));
            }
        }

        trace!("Created global environment with {} bindings", this.variables.len());
        Rc::new(RefCell::new(this))
    }

    #[must_use]
    pub fn new_child(parent: &Rc<RefCell<Self>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            parent: Some(Rc::clone(parent)),
            variables: Vec::new(),
        }))
    }

    /// Binds the name in this frame, shadowing any outer binding. Redefining
    /// a name of this frame keeps its original position.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();

        match self.variables.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = value,
            None => self.variables.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some((_, value)) = self.variables.iter().find(|(existing, _)| existing == name) {
            return Some(value.clone());
        }

        self.parent.as_ref()?.borrow().get(name)
    }

    /// Rewrites the nearest existing binding. Returns `false` when the name
    /// is not bound in any frame of the chain.
    #[must_use]
    pub fn assign(&mut self, name: &str, new: Value) -> bool {
        if let Some((_, value)) = self.variables.iter_mut().find(|(existing, _)| existing == name) {
            *value = new;
            return true;
        }

        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, new),
            None => false,
        }
    }
}

/// Lists the bindings of this frame only, in definition order.
impl Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.variables.iter().map(|(name, value)| (name, value)))
            .finish()
    }
}
