//! Small printing helpers shared by [`crate::main`].

use std::path::Path;

use prover::structures::clause::Clause;
use prover::types::err::ErrorKind;

/// Reports the outcome of parsing a clause-set file to stderr-style status lines on stdout,
/// mirroring the `c `-prefixed status convention.
///
/// On failure the message includes `path`, per the error-handling design's requirement that
/// malformed input be reported at the boundary with the offending file name attached.
pub fn examine_parse_report(parse_report: &Result<Vec<Clause>, ErrorKind>, path: &Path) {
    match parse_report {
        Ok(clauses) => println!("c Read {} clauses.", clauses.len()),
        Err(e) => println!("c Parse error in {}: {e}", path.display()),
    }
}
