/*!
The context which owns a proof attempt: to it a clause set is given, and from it an [`Outcome`],
a [`Trace`](crate::reports::Trace), and the final clause set are returned (C6).

# Example
```rust
# use prover::context::Context;
# use prover::context::config::Config;
# use prover::reports::Outcome;
# use prover::structures::clause::Clause;
# use prover::structures::literal::Literal;
let context = Context::from_config(Config::default());

let p = Clause::new(vec![Literal::new("P", vec![], false)]);
let not_p = Clause::new(vec![Literal::new("P", vec![], true)]);

let result = context.prove(vec![p, not_p]);
assert_eq!(result.outcome, Outcome::Proved);
```
*/

pub mod config;
pub use config::Config;

use std::collections::BTreeSet;

use crate::misc::log::targets;
use crate::reports::{Outcome, Trace, TraceRecord};
use crate::resolution::resolve;
use crate::structures::clause::Clause;
use crate::structures::term::Term;
use crate::substitution::Substitution;

/// The return value of [`Context::prove`]: why the search stopped, the trace of every step taken,
/// and the clause set as it stood when the search stopped.
#[derive(Debug, Clone)]
pub struct ProveResult {
    pub outcome: Outcome,
    pub trace: Trace,
    pub final_clause_set: Vec<Clause>,
}

/// Owns the configuration for a single proof attempt. A context is used once: [`Context::prove`]
/// consumes the initial clause set and returns a [`ProveResult`] by value, rather than mutating
/// any state held by the context itself — there is none to mutate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    config: Config,
}

impl Context {
    /// Builds a context from a complete configuration.
    pub fn from_config(config: Config) -> Self {
        Context { config }
    }

    /// Runs level-saturation resolution over `initial_clauses` to a refutation, a fixed point, or
    /// the configured step budget, whichever comes first.
    ///
    /// Duplicate clauses in the input are collapsed before the first round, same as any resolvent
    /// discovered during the search (clause equality is already set-equality; see
    /// [`Clause::new`](crate::structures::clause::Clause::new)).
    pub fn prove(&self, initial_clauses: Vec<Clause>) -> ProveResult {
        let mut working_set: Vec<Clause> = Vec::new();
        for clause in initial_clauses {
            if !working_set.contains(&clause) {
                working_set.push(clause);
            }
        }

        let mut trace = Trace::new();
        let mut step = 1usize;
        let mut rename_generation = 0u64;

        for round in 0..self.config.step_budget {
            log::debug!(target: targets::SATURATION, "round {round}: |W| = {}", working_set.len());
            let mut newly_derived: Vec<Clause> = Vec::new();

            for i in 0..working_set.len() {
                for j in (i + 1)..working_set.len() {
                    let left = &working_set[i];
                    let right_owned;
                    let right = if self.config.standardize_apart {
                        rename_generation += 1;
                        right_owned = rename_apart(&working_set[j], rename_generation);
                        &right_owned
                    } else {
                        &working_set[j]
                    };

                    let Some(resolvent) = resolve(left, right) else {
                        continue;
                    };

                    if resolvent.clause.is_empty() {
                        trace.push(TraceRecord::Contradiction {
                            step,
                            left: left.clone(),
                            right: right.clone(),
                        });
                        log::info!(target: targets::SATURATION, "contradiction: {left} and {right}");
                        return ProveResult {
                            outcome: Outcome::Proved,
                            trace,
                            final_clause_set: working_set,
                        };
                    }

                    if working_set.contains(&resolvent.clause) || newly_derived.contains(&resolvent.clause) {
                        continue;
                    }

                    trace.push(TraceRecord::Resolution {
                        step,
                        substitution: resolvent.substitution,
                        left: left.clone(),
                        right: right.clone(),
                        resolvent: resolvent.clause.clone(),
                    });
                    step += 1;
                    newly_derived.push(resolvent.clause);
                }
            }

            if newly_derived.is_empty() {
                return ProveResult {
                    outcome: Outcome::Saturated,
                    trace,
                    final_clause_set: working_set,
                };
            }

            working_set.extend(newly_derived);
        }

        ProveResult {
            outcome: Outcome::BudgetExhausted,
            trace,
            final_clause_set: working_set,
        }
    }
}

/// Convenience entry point matching the driver's external contract directly: builds a context
/// with a given step budget and default otherwise, and proves `initial_clauses`. Equivalent to
/// `Context::from_config(Config { step_budget, ..Config::default() }).prove(initial_clauses)`.
pub fn prove(initial_clauses: Vec<Clause>, step_budget: usize) -> ProveResult {
    let config = Config {
        step_budget,
        ..Config::default()
    };
    Context::from_config(config).prove(initial_clauses)
}

/// Renames every variable of `clause` apart by suffixing it with `generation`, leaving constants
/// untouched. Used to implement [`Config::standardize_apart`] at the driver level: resolution
/// itself (C5) always treats its two arguments as sharing a namespace.
fn rename_apart(clause: &Clause, generation: u64) -> Clause {
    let mut variables = BTreeSet::new();
    for literal in clause.literals() {
        for arg in &literal.args {
            collect_variables(arg, &mut variables);
        }
    }

    let mut substitution = Substitution::empty();
    for variable in variables {
        let renamed = Term::Variable(format!("{variable}__{generation}"));
        substitution = substitution.extend(variable, renamed);
    }

    clause.apply(&substitution)
}

fn collect_variables(term: &Term, out: &mut BTreeSet<String>) {
    match term {
        Term::Variable(name) => {
            out.insert(name.clone());
        }
        Term::Constant(_) => {}
        Term::Compound(_, args) => {
            for arg in args {
                collect_variables(arg, out);
            }
        }
    }
}
