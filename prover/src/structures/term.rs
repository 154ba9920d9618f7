//! First-order terms: variables, constants, and compound (functor-applied) terms.
//!
//! Whether a term is a variable or a constant is never stored as a tag of its own — it follows
//! solely from the first character of its name, per [`classify`]. A name whose first character is
//! a lowercase Latin letter denotes a variable; anything else (uppercase Latin, a digit, a symbol,
//! a non-Latin letter) denotes a constant.

use std::fmt;

use crate::substitution::Substitution;

/// The three shapes a first-order term may take.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A universally quantified placeholder, e.g. `x`.
    Variable(String),

    /// A fixed individual, e.g. `A` or `a1`.
    Constant(String),

    /// A functor applied to a non-empty, ordered list of argument terms, e.g. `f(x, A)`.
    Compound(String, Vec<Term>),
}

/// Whether a bare name denotes a variable or a constant, decided solely by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Variable,
    Constant,
}

/// Classifies a bare name as a variable or a constant.
///
/// A name with no characters at all is treated as a constant: there is nothing to be lowercase.
pub fn classify(name: &str) -> Classification {
    match name.chars().next() {
        Some(c) if c.is_ascii_lowercase() => Classification::Variable,
        _ => Classification::Constant,
    }
}

impl Term {
    /// Builds an atomic term (a variable or a constant) from a bare name.
    pub fn atom(name: impl Into<String>) -> Self {
        let name = name.into();
        match classify(&name) {
            Classification::Variable => Term::Variable(name),
            Classification::Constant => Term::Constant(name),
        }
    }

    /// Builds a compound term from a functor name and its arguments.
    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Compound(functor.into(), args)
    }

    /// The term's classification. Compounds are never variables, so this only distinguishes
    /// `Variable` from everything else.
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// The variable name, if this term is a variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Applies a substitution to this term, structurally.
    ///
    /// For a variable bound in `substitution`, the bound term is itself re-applied against
    /// `substitution` before being returned, so a chain of bindings resolves to a fixed point
    /// in one call (spec: substitution composition is idempotent application at lookup time).
    pub fn apply(&self, substitution: &Substitution) -> Term {
        match self {
            Term::Variable(name) => match substitution.get(name) {
                Some(bound) => bound.apply(substitution),
                None => self.clone(),
            },
            Term::Constant(_) => self.clone(),
            Term::Compound(functor, args) => {
                Term::Compound(functor.clone(), args.iter().map(|a| a.apply(substitution)).collect())
            }
        }
    }

    /// True iff this term mentions the variable named `name` anywhere, including nested inside
    /// compounds. The occurs-check: a binding `v ↦ t` is only well-formed if `occurs(v, t)` is
    /// false.
    pub fn occurs(&self, name: &str) -> bool {
        match self {
            Term::Variable(v) => v == name,
            Term::Constant(_) => false,
            Term::Compound(_, args) => args.iter().any(|a| a.occurs(name)),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(name) | Term::Constant(name) => write!(f, "{name}"),
            Term::Compound(functor, args) => {
                write!(f, "{functor}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}
