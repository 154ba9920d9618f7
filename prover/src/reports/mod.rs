/*!
The trace and outcome returned by [`crate::context::Context::prove`] (part of C6/C7).

The trace is the primary data output of this crate, not a logging side-channel (see
[`crate::misc::log`] for the separate diagnostic-log facility). Its [`Display`](std::fmt::Display)
implementation reproduces the external text contract line for line: a fixed header, one line per
resolution step taken, and a closing line stating whether a contradiction was derived.
*/

use std::fmt;

use crate::structures::clause::Clause;
use crate::substitution::Substitution;

/// One line of the returned trace, corresponding to one round-step of the saturation driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceRecord {
    /// A non-empty resolvent was derived from `left` and `right` under `substitution`.
    Resolution {
        step: usize,
        substitution: Substitution,
        left: Clause,
        right: Clause,
        resolvent: Clause,
    },

    /// The empty clause was derived from `left` and `right`: a refutation.
    Contradiction {
        step: usize,
        left: Clause,
        right: Clause,
    },
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceRecord::Resolution {
                step,
                substitution,
                left,
                right,
                resolvent,
            } => write!(
                f,
                "Шаг {step}: Унификация {substitution} в {left} и {right}. Резолюция -> {resolvent}."
            ),
            TraceRecord::Contradiction { step, left, right } => {
                write!(f, "Шаг {step}: Резолюция {left} и {right} -> Противоречие.")
            }
        }
    }
}

/// Why the saturation driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The empty clause was derived: the input clause set is unsatisfiable.
    Proved,
    /// A fixed point was reached with no contradiction: no round produced a new clause.
    Saturated,
    /// The configured step budget was exhausted before either of the above.
    BudgetExhausted,
}

impl Outcome {
    /// The `{true|false}` rendered on the trace's closing line.
    pub fn proved(self) -> bool {
        matches!(self, Outcome::Proved)
    }
}

/// An ordered sequence of [`TraceRecord`]s, in the order resolvents were first discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    records: Vec<TraceRecord>,
}

impl Trace {
    pub fn new() -> Self {
        Trace::default()
    }

    pub fn push(&mut self, record: TraceRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders the trace's per-step lines together with the final `outcome` line, as the external
    /// text contract specifies: a fixed header, one line per record, then the closing line.
    pub fn render(&self, outcome: Outcome) -> String {
        let mut out = String::from("Лог шагов:\n");
        for record in &self.records {
            out.push_str(&record.to_string());
            out.push('\n');
        }
        out.push_str(&format!("Противоречие найдено: {}\n", outcome.proved()));
        out
    }
}
