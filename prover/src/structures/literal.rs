//! Literals: a predicate applied to an ordered list of terms, optionally negated (C2).

use std::fmt;

use crate::structures::term::Term;
use crate::substitution::Substitution;

/// A (possibly negated) predicate applied to a tuple of terms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    pub predicate: String,
    pub args: Vec<Term>,
    pub negated: bool,
}

impl Literal {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>, negated: bool) -> Self {
        Literal {
            predicate: predicate.into(),
            args,
            negated,
        }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// The same literal with its negation flag flipped.
    pub fn negate(&self) -> Literal {
        Literal {
            negated: !self.negated,
            ..self.clone()
        }
    }

    /// True iff `self` and `other` are complementary: same predicate, same arity, opposite sign.
    /// This is the pairing condition the resolver (C5) looks for; unifiability of the argument
    /// terms is checked separately.
    pub fn complementary_of(&self, other: &Literal) -> bool {
        self.predicate == other.predicate && self.arity() == other.arity() && self.negated != other.negated
    }

    /// Applies a substitution to every argument of this literal.
    pub fn apply(&self, substitution: &Substitution) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            args: self.args.iter().map(|a| a.apply(substitution)).collect(),
            negated: self.negated,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "¬")?;
        }
        write!(f, "{}(", self.predicate)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complementary_requires_same_predicate_arity_and_opposite_sign() {
        let p_x = Literal::new("P", vec![Term::atom("x")], false);
        let not_p_x = Literal::new("P", vec![Term::atom("x")], true);
        let not_p_x_y = Literal::new("P", vec![Term::atom("x"), Term::atom("y")], true);
        let not_q_x = Literal::new("Q", vec![Term::atom("x")], true);

        assert!(p_x.complementary_of(&not_p_x));
        assert!(!p_x.complementary_of(&not_p_x_y));
        assert!(!p_x.complementary_of(&not_q_x));
        assert!(!p_x.complementary_of(&p_x));
    }

    #[test]
    fn negate_flips_only_the_sign() {
        let p = Literal::new("P", vec![Term::atom("x")], false);
        assert!(p.negate().negated);
        assert_eq!(p.negate().negate(), p);
    }

    #[test]
    fn display_renders_negation_as_prefix_symbol() {
        let p = Literal::new("P", vec![Term::atom("a"), Term::atom("b")], true);
        assert_eq!(p.to_string(), "¬P(a, b)");
    }
}
