/*!
Reads a clause set from the structured external representation (C7).

The wire format is a JSON array of clause objects. A clause object has one field, `literals`
(an array). A literal object has `predicate` (string), `negated` (bool), and `args` (array). An
argument is either a bare JSON string — an atomic term, classified variable-or-constant by its
first character the same way everywhere else in this crate — or an object `{"name": ..., "args":
[...]}` for a nested compound term. See [`structures`] for the `serde`-derived DTOs this shape
deserializes into before being normalized into [`Clause`] values.
*/

pub mod structures;

use std::io::Read;

use crate::structures::clause::Clause;
use crate::types::err::ErrorKind;

use structures::RawClause;

/// Parses a clause set from a JSON string.
pub fn from_str(input: &str) -> Result<Vec<Clause>, ErrorKind> {
    let raw: Vec<RawClause> = serde_json::from_str(input).map_err(crate::types::err::ParseError::from)?;
    Ok(raw.into_iter().map(RawClause::into_clause).collect())
}

/// Parses a clause set from any [`Read`] source, e.g. an open file.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Vec<Clause>, ErrorKind> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    from_str(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_propositional_clause_set() {
        let input = r#"[
            {"literals": [{"predicate": "P", "negated": false, "args": []}]},
            {"literals": [
                {"predicate": "P", "negated": true, "args": []},
                {"predicate": "Q", "negated": false, "args": []}
            ]}
        ]"#;

        let clauses = from_str(input).unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].len(), 1);
        assert_eq!(clauses[1].len(), 2);
    }

    #[test]
    fn parses_nested_compound_arguments() {
        let input = r#"[
            {"literals": [{"predicate": "P", "negated": false, "args": [
                {"name": "f", "args": ["x", "A"]}
            ]}]}
        ]"#;
        let clauses = from_str(input).unwrap();
        assert_eq!(clauses[0].to_string(), "P(f(x, A))");
    }

    #[test]
    fn malformed_input_is_reported_as_a_parse_error() {
        let input = r#"[{"literals": "not a list"}]"#;
        assert!(matches!(from_str(input), Err(ErrorKind::Parse(_))));
    }
}
