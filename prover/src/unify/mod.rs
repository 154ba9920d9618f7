/*!
Robinson-style unification with occurs-check (C4).

[`unify_terms`] is the recursive heart of the engine: given two terms and a substitution built up
so far, it either extends the substitution to make the terms equal, or fails. [`unify_literals`]
drives it over the argument lists of two literals under an initially empty substitution, and is
the only entry point the resolver (see [`crate::resolution`]) calls.

Every step taken is appended to a [`UnifyTrace`], per the external trace contract in the crate's
top-level documentation.
*/

pub mod trace;
pub use trace::{UnifyDecision, UnifyOutcome, UnifyStep, UnifyTrace};

use crate::misc::log::targets;
use crate::structures::literal::Literal;
use crate::structures::term::Term;
use crate::substitution::Substitution;

/// Attempts to unify `a` and `b` under `substitution`, recording every decision taken to `trace`.
///
/// Follows the precedence given in the specification:
/// 1. A variable already bound in `substitution` is dereferenced one step before anything else.
/// 2. Structurally equal terms succeed trivially.
/// 3. A (dereferenced) variable is bound to the other term, subject to the occurs-check.
/// 4. Two compounds with the same functor and arity are unified argument-by-argument.
/// 5. Everything else — mismatched functors/arities, or two distinct constants — fails.
pub fn unify_terms(a: Term, b: Term, substitution: Substitution, trace: &mut UnifyTrace) -> Option<Substitution> {
    // One-step dereference: deeper chains are followed by the recursive calls below re-entering
    // this same branch.
    let a = match &a {
        Term::Variable(name) => substitution.get(name).cloned().unwrap_or(a),
        _ => a,
    };
    let b = match &b {
        Term::Variable(name) => substitution.get(name).cloned().unwrap_or(b),
        _ => b,
    };

    if a == b {
        log::trace!(target: targets::UNIFY, "{a} and {b} already unified");
        trace.push(UnifyDecision::AlreadyEqual(a, b));
        return Some(substitution);
    }

    if let Term::Variable(name) = &a {
        if b.occurs(name) {
            log::trace!(target: targets::UNIFY, "occurs-check failed: {name} in {b}");
            trace.push(UnifyDecision::OccursCheckFailed { variable: name.clone(), term: b });
            return None;
        }
        log::trace!(target: targets::UNIFY, "binding {name} to {b}");
        let variable = name.clone();
        trace.push(UnifyDecision::Bound { variable: variable.clone(), term: b.clone() });
        return Some(substitution.extend(variable, b));
    }

    if let Term::Variable(name) = &b {
        if a.occurs(name) {
            log::trace!(target: targets::UNIFY, "occurs-check failed: {name} in {a}");
            trace.push(UnifyDecision::OccursCheckFailed { variable: name.clone(), term: a });
            return None;
        }
        log::trace!(target: targets::UNIFY, "binding {name} to {a}");
        let variable = name.clone();
        trace.push(UnifyDecision::Bound { variable: variable.clone(), term: a.clone() });
        return Some(substitution.extend(variable, a));
    }

    if let (Term::Compound(f1, args1), Term::Compound(f2, args2)) = (&a, &b) {
        if f1 != f2 || args1.len() != args2.len() {
            trace.push(UnifyDecision::FunctorMismatch(a.clone(), b.clone()));
            return None;
        }

        trace.push(UnifyDecision::Descend { left: a.clone(), right: b.clone() });
        let mut current = substitution;
        for (x, y) in args1.iter().zip(args2.iter()) {
            current = unify_terms(x.clone(), y.clone(), current, trace)?;
        }
        return Some(current);
    }

    trace.push(UnifyDecision::Incompatible(a, b));
    None
}

/// Attempts to unify two literals: succeeds only if their predicates match, their negation flags
/// differ, and their arities match, and then unifies the argument lists pairwise under an
/// initially empty substitution.
pub fn unify_literals(l1: &Literal, l2: &Literal) -> UnifyOutcome {
    let mut trace = UnifyTrace::new();

    if l1.predicate != l2.predicate || l1.negated == l2.negated || l1.arity() != l2.arity() {
        return UnifyOutcome { substitution: None, trace };
    }

    let mut substitution = Substitution::empty();
    for (a, b) in l1.args.iter().zip(l2.args.iter()) {
        match unify_terms(a.clone(), b.clone(), substitution, &mut trace) {
            Some(next) => substitution = next,
            None => return UnifyOutcome { substitution: None, trace },
        }
    }

    log::debug!(target: targets::UNIFY, "unified {l1} and {l2}: {substitution}");
    UnifyOutcome { substitution: Some(substitution), trace }
}
