//! Substitutions: finite, immutable variable → term mappings (C3).
//!
//! A substitution never rewrites an existing binding in place — [`Substitution::extend`] returns
//! a new value built from the old one plus one more binding, and the old value remains valid.
//! This matches the depth-first, non-mutating nature of unification: a failed branch simply drops
//! its substitution and nothing upstream is disturbed.
//!
//! Composition is *idempotent application*: rather than eagerly rewriting every existing binding
//! whenever a new one is added, a lookup chases through the chain of bindings until it reaches a
//! fixed point (see [`Term::apply`](crate::structures::term::Term::apply) and [`Substitution::resolve`]).

use std::fmt;

use crate::structures::term::Term;

/// A finite variable → term mapping, insertion-ordered so that trace rendering (spec: `{var:
/// term, …}`) reproduces the order bindings were discovered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: Vec<(String, Term)>,
}

impl Substitution {
    /// The empty substitution.
    pub fn empty() -> Self {
        Substitution::default()
    }

    /// The term bound to `variable`, if any. Does not chase further than one lookup; callers that
    /// need the fully-resolved term should use [`Term::apply`](crate::structures::term::Term::apply)
    /// or [`Substitution::resolve`].
    pub fn get(&self, variable: &str) -> Option<&Term> {
        self.bindings
            .iter()
            .rev()
            .find(|(name, _)| name == variable)
            .map(|(_, term)| term)
    }

    /// True iff `variable` is bound.
    pub fn contains(&self, variable: &str) -> bool {
        self.get(variable).is_some()
    }

    /// Returns a new substitution containing every binding of `self` plus `variable ↦ term`.
    ///
    /// Does not rewrite any existing binding; a binding that mentions `variable` is left as-is
    /// until it is next looked up, at which point [`Term::apply`] chases it through.
    pub fn extend(&self, variable: impl Into<String>, term: Term) -> Substitution {
        let mut bindings = self.bindings.clone();
        bindings.push((variable.into(), term));
        Substitution { bindings }
    }

    /// Chases `variable` through the substitution to a fixed point: a free variable, a constant,
    /// or a compound whose own argument terms have likewise been chased.
    ///
    /// Used both for the `full_substitution` rendered in the trace and when a resolvent's literals
    /// need the unifier baked in at the end of a successful unification.
    pub fn resolve(&self, variable: &str) -> Term {
        match self.get(variable) {
            Some(term) => term.apply(self),
            None => Term::atom(variable),
        }
    }

    /// Iterates bindings in insertion order, the order the `{var: term, …}` trace rendering uses.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings.iter().map(|(name, term)| (name.as_str(), term))
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, term)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {term}")?;
        }
        write!(f, "}}")
    }
}
