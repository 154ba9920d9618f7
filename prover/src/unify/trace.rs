//! Stepwise records of a single unification attempt.

use std::fmt;

use crate::structures::term::Term;
use crate::substitution::Substitution;

/// What happened at one step of [`unify_terms`](super::unify_terms).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyDecision {
    /// The two terms were already structurally equal; the substitution is unchanged.
    AlreadyEqual(Term, Term),

    /// A variable was bound to a term.
    Bound { variable: String, term: Term },

    /// Binding a variable to a term was rejected because the term mentions the variable.
    OccursCheckFailed { variable: String, term: Term },

    /// Two compounds could not be unified because their functor names (or arities) differ.
    FunctorMismatch(Term, Term),

    /// Unification descended into the arguments of two same-functor, same-arity compounds.
    Descend { left: Term, right: Term },

    /// Neither term is a variable and they are not structurally equal, non-compound terms with
    /// incompatible shapes (e.g. two different constants, or a constant against a compound).
    Incompatible(Term, Term),
}

impl fmt::Display for UnifyDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnifyDecision::AlreadyEqual(a, b) => write!(f, "{a} и {b} уже унифицированы"),
            UnifyDecision::Bound { variable, term } => write!(f, "переменная {variable} связана с {term}"),
            UnifyDecision::OccursCheckFailed { variable, term } => {
                write!(f, "циклическая подстановка: переменная {variable} входит в терм {term}")
            }
            UnifyDecision::FunctorMismatch(a, b) => {
                write!(f, "унификация {a} и {b} невозможна: разные имена или количество аргументов")
            }
            UnifyDecision::Descend { left, right } => write!(f, "унификация термов {left} и {right}"),
            UnifyDecision::Incompatible(a, b) => {
                write!(f, "унификация {a} и {b} невозможна: несовместимые типы")
            }
        }
    }
}

/// One numbered step within a single call to [`unify_terms`](super::unify_terms).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifyStep {
    pub step: usize,
    pub decision: UnifyDecision,
}

/// The trace of a single unification attempt: a sequence of numbered steps, with the step counter
/// starting fresh at 1 for each attempt (sub-steps are namespaced beneath whichever outer
/// resolution step invoked this unification; see the saturation driver).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifyTrace {
    steps: Vec<UnifyStep>,
}

impl UnifyTrace {
    pub fn new() -> Self {
        UnifyTrace::default()
    }

    pub fn push(&mut self, decision: UnifyDecision) {
        let step = self.steps.len() + 1;
        self.steps.push(UnifyStep { step, decision });
    }

    pub fn steps(&self) -> &[UnifyStep] {
        &self.steps
    }
}

/// The outcome of a unification attempt: either the accumulated substitution, or failure (no
/// unifier exists), together with the trace of how that conclusion was reached.
#[derive(Debug, Clone)]
pub struct UnifyOutcome {
    pub substitution: Option<Substitution>,
    pub trace: UnifyTrace,
}
