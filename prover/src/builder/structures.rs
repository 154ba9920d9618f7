//! `serde`-derived DTOs mirroring the wire shape of a clause set, and their normalization into
//! the crate's own [`Clause`]/[`Literal`]/[`Term`] types.

use serde::Deserialize;

use crate::structures::clause::Clause;
use crate::structures::literal::Literal;
use crate::structures::term::Term;

#[derive(Debug, Deserialize)]
pub struct RawClause {
    literals: Vec<RawLiteral>,
}

#[derive(Debug, Deserialize)]
pub struct RawLiteral {
    predicate: String,
    negated: bool,
    args: Vec<RawArg>,
}

/// An argument is either a bare atomic name, or a compound term object. Untagged so that the
/// wire format needs no explicit tag field to distinguish the two shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawArg {
    Atom(String),
    Compound { name: String, args: Vec<RawArg> },
}

impl RawClause {
    pub fn into_clause(self) -> Clause {
        Clause::new(self.literals.into_iter().map(RawLiteral::into_literal).collect())
    }
}

impl RawLiteral {
    pub fn into_literal(self) -> Literal {
        Literal::new(
            self.predicate,
            self.args.into_iter().map(RawArg::into_term).collect(),
            self.negated,
        )
    }
}

impl RawArg {
    pub fn into_term(self) -> Term {
        match self {
            RawArg::Atom(name) => Term::atom(name),
            RawArg::Compound { name, args } => {
                Term::compound(name, args.into_iter().map(RawArg::into_term).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_args_classify_the_same_way_as_everywhere_else() {
        let term = RawArg::Atom("x".into()).into_term();
        assert_eq!(term, Term::atom("x"));
        let term = RawArg::Atom("A".into()).into_term();
        assert_eq!(term, Term::atom("A"));
    }

    #[test]
    fn compound_args_nest() {
        let term = RawArg::Compound {
            name: "f".into(),
            args: vec![RawArg::Atom("x".into())],
        }
        .into_term();
        assert_eq!(term, Term::compound("f", vec![Term::atom("x")]));
    }
}
