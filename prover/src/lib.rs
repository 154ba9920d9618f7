/*!
A library for deciding whether a finite set of first-order logic clauses is unsatisfiable, by
searching for a resolution refutation and recording a human-readable trace of every step taken.

prover is built for students and teaching tools that want to *see* how an automated theorem
prover reaches a contradiction on a small, hand-constructed problem, rather than only being told
the verdict. It implements Robinson-style unification with occurs-check and a level-saturated
binary resolution search; it does not attempt equality reasoning, paramodulation, subsumption, or
clause indexing, and it makes no attempt to be a competitive prover on large problems.

# Orientation

The library is organized around the core structure of a [context].

- [structures] holds the term/literal/clause data model (variables, constants, compounds; signed
  atoms; clauses with set semantics).
- [substitution] is the finite variable-to-term mapping threaded through unification.
- [unify] is the recursive unifier, with an occurs-check and a stepwise trace of its own.
- [resolution] produces a resolvent from two clauses on a complementary, unifiable literal pair.
- [context] drives the saturation search to a fixed point, a refutation, or a step budget, and is
  the library's main entry point — see [`Context::prove`](context::Context::prove).
- [reports] holds the [`Outcome`](reports::Outcome) and the proof [`Trace`](reports::Trace)
  returned by a proof attempt, including the rendering of the trace's external text format.
- [builder] reads a clause set from the structured JSON representation described in its own
  module documentation.

# Example

```rust
use prover::builder;
use prover::context::Context;
use prover::context::config::Config;
use prover::reports::Outcome;

let input = r#"[
    {"literals": [{"predicate": "P", "negated": false, "args": []}]},
    {"literals": [
        {"predicate": "P", "negated": true, "args": []},
        {"predicate": "Q", "negated": false, "args": []}
    ]},
    {"literals": [{"predicate": "Q", "negated": true, "args": []}]}
]"#;

let clauses = builder::from_str(input).unwrap();
let result = Context::from_config(Config::default()).prove(clauses);

assert_eq!(result.outcome, Outcome::Proved);
println!("{}", result.trace.render(result.outcome));
```

# Guiding principles

## Modularity

A resolution prover is built of a handful of interconnected parts, and where reasonable
interaction between parts happens through documented access points. Things such as
[literals](structures::literal::Literal) and [clauses](structures::clause::Clause) are plain
value types with narrow, well-named operations rather than a single do-everything struct. Use of
external crates is limited to crates which help support modularity — [log] for diagnostics and
[serde]/[serde_json] for the one structured-document boundary the library has.

## Verification

The returned [`Trace`](reports::Trace) is not a debugging aid bolted on after the fact: it is the
library's other first-class output, alongside the `proved`/`saturated`/`budget_exhausted`
[`Outcome`](reports::Outcome), and its exact rendered form is part of the external contract (see
[reports]). A caller that wants to check *why* a proof succeeded or failed can read the trace
directly rather than re-deriving it from logs.

## Simple efficiency

Clauses are stored with a canonical literal ordering so set-equality — needed every round to
decide whether a resolvent is actually new — is a vector comparison rather than a multiset
comparison (see [`Clause::new`](structures::clause::Clause::new)). Substitutions are small,
cheaply cloned, and applied on lookup rather than eagerly composed; see [substitution] for the
tradeoff this implies.
*/

pub mod builder;
pub mod context;
pub mod misc;
pub mod reports;
pub mod resolution;
pub mod structures;
pub mod substitution;
pub mod types;
pub mod unify;
