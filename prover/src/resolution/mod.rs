/*!
Binary resolution between two clauses (C5).

Given two clauses `C1` and `C2`, [`resolve`] enumerates ordered pairs of one literal from each
that are [complementary](crate::structures::literal::Literal::complementary_of), and returns the
resolvent formed from the first such pair whose literals also unify. Everything else from both
parents — minus the two resolved-upon literals — survives into the resolvent, with the unifier
applied and duplicates collapsed by the clause constructor's set-equality.

Variables in `C1` and `C2` are treated in a shared namespace: this module performs no automatic
standardization-apart. A caller that needs that (two clauses sharing a variable name that are not
meant to share a binding) should rename apart before calling `resolve` — see
[`Config::standardize_apart`](crate::context::config::Config) for the hook this crate exposes for
doing so at the driver level.

Only the first complementary, unifiable pair found is used — at most one resolvent per call. This
is sound, and the level-saturated driver (see [`crate::context`]) makes up for the incompleteness
of a single resolvent per pair by revisiting every pair again on the next round once new clauses
have joined the working set.
*/

use crate::misc::log::targets;
use crate::structures::clause::Clause;
use crate::substitution::Substitution;
use crate::unify::{unify_literals, UnifyTrace};

/// The result of a successful resolution: the resolvent clause, the unifier used to produce it,
/// and the trace of the unification that found that unifier.
pub struct Resolvent {
    pub clause: Clause,
    pub substitution: Substitution,
    pub unify_trace: UnifyTrace,
}

/// Attempts to resolve `c1` against `c2`, returning the first resolvent found, or `None` if no
/// complementary, unifiable pair of literals exists between them.
pub fn resolve(c1: &Clause, c2: &Clause) -> Option<Resolvent> {
    for l1 in c1.literals() {
        for l2 in c2.literals() {
            if !l1.complementary_of(l2) {
                continue;
            }

            let outcome = unify_literals(l1, l2);
            let Some(substitution) = outcome.substitution else {
                continue;
            };

            let remaining = c1
                .literals()
                .iter()
                .filter(|l| *l != l1)
                .chain(c2.literals().iter().filter(|l| *l != l2))
                .map(|l| l.apply(&substitution))
                .collect::<Vec<_>>();

            let clause = Clause::new(remaining);
            log::debug!(target: targets::RESOLUTION, "resolved {c1} and {c2} on {l1}/{l2} -> {clause}");

            return Some(Resolvent {
                clause,
                substitution,
                unify_trace: outcome.trace,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;
    use crate::structures::term::Term;

    fn clause(literals: Vec<Literal>) -> Clause {
        Clause::new(literals)
    }

    #[test]
    fn propositional_resolution_drops_the_resolved_literals() {
        // {P, Q} and {¬P} -> {Q}
        let c1 = clause(vec![
            Literal::new("P", vec![], false),
            Literal::new("Q", vec![], false),
        ]);
        let c2 = clause(vec![Literal::new("P", vec![], true)]);

        let resolvent = resolve(&c1, &c2).unwrap();
        assert_eq!(resolvent.clause, clause(vec![Literal::new("Q", vec![], false)]));
    }

    #[test]
    fn resolving_complementary_units_yields_the_empty_clause() {
        let c1 = clause(vec![Literal::new("P", vec![], false)]);
        let c2 = clause(vec![Literal::new("P", vec![], true)]);
        let resolvent = resolve(&c1, &c2).unwrap();
        assert!(resolvent.clause.is_empty());
    }

    #[test]
    fn first_order_resolution_bakes_in_the_unifier() {
        // {P(x)} and {¬P(A)} -> {} under x ↦ A
        let c1 = clause(vec![Literal::new("P", vec![Term::atom("x")], false)]);
        let c2 = clause(vec![Literal::new("P", vec![Term::atom("A")], true)]);
        let resolvent = resolve(&c1, &c2).unwrap();
        assert!(resolvent.clause.is_empty());
        assert_eq!(resolvent.substitution.resolve("x"), Term::atom("A"));
    }

    #[test]
    fn no_complementary_pair_yields_no_resolvent() {
        let c1 = clause(vec![Literal::new("P", vec![Term::atom("A")], false)]);
        let c2 = clause(vec![Literal::new("Q", vec![Term::atom("B")], false)]);
        assert!(resolve(&c1, &c2).is_none());
    }

    #[test]
    fn occurs_check_failure_prevents_a_spurious_resolvent() {
        // {P(x)} and {¬P(f(x))} must not resolve.
        let c1 = clause(vec![Literal::new("P", vec![Term::atom("x")], false)]);
        let c2 = clause(vec![Literal::new(
            "P",
            vec![Term::compound("f", vec![Term::atom("x")])],
            true,
        )]);
        assert!(resolve(&c1, &c2).is_none());
    }
}
