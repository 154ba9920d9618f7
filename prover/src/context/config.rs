//! Configuration of a [`Context`](super::Context).

/// The primary configuration structure.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// The maximum number of outer saturation rounds to run before surfacing
    /// [`BudgetExhausted`](crate::reports::Outcome::BudgetExhausted) to the caller.
    pub step_budget: usize,

    /// When `true`, the variables of the second clause of every candidate pair are renamed apart
    /// (given a fresh suffix) before resolution is attempted, so that two clauses which happen to
    /// share a variable name are never treated as sharing a binding.
    ///
    /// Off by default: the shared-namespace behaviour is what the original engine this crate is
    /// modeled on relies on, and its test corpus is hand-constructed with that in mind. Callers
    /// feeding in clause sets from an independent source should turn this on.
    pub standardize_apart: bool,
}

impl Default for Config {
    /// The default configuration: a step budget of 50 outer rounds, no standardization-apart.
    fn default() -> Self {
        Config {
            step_budget: 50,
            standardize_apart: false,
        }
    }
}
