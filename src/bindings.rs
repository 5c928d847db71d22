use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Supplies values for variable names during evaluation.
///
/// Implement this trait to evaluate against whatever storage your application
/// already keeps variables in. Lookups happen only along the evaluated path,
/// so the untaken branch of a conditional never asks for its variables.
pub trait Bindings {
    /// Returns the value bound to `name`, or `None` if it is unbound.
    fn get(&self, name: &str) -> Option<f64>;
}

impl<S: BuildHasher> Bindings for HashMap<String, f64, S> {
    fn get(&self, name: &str) -> Option<f64> {
        HashMap::get(self, name).copied()
    }
}

impl<S: BuildHasher> Bindings for HashMap<&str, f64, S> {
    fn get(&self, name: &str) -> Option<f64> {
        HashMap::get(self, name).copied()
    }
}

impl Bindings for BTreeMap<String, f64> {
    fn get(&self, name: &str) -> Option<f64> {
        BTreeMap::get(self, name).copied()
    }
}

/// No variables at all; for constant expressions.
impl Bindings for () {
    fn get(&self, _name: &str) -> Option<f64> {
        None
    }
}

/// A single `(name, value)` pair; what a scan over the free variable binds
/// per sample, with no allocation.
impl Bindings for (&str, f64) {
    fn get(&self, name: &str) -> Option<f64> {
        (self.0 == name).then_some(self.1)
    }
}

impl Bindings for [(&str, f64)] {
    fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> Bindings for [(&str, f64); N] {
    fn get(&self, name: &str) -> Option<f64> {
        Bindings::get(self.as_slice(), name)
    }
}

impl<B: Bindings + ?Sized> Bindings for &B {
    fn get(&self, name: &str) -> Option<f64> {
        B::get(*self, name)
    }
}
