/*!
Reports for the context, and the SZS result lines built from them.

A [Report] describes the outcome of a saturation.
The SZS status additionally depends on the [kind](ProblemKind) of the problem: a refutation of a cnf problem shows the clause set unsatisfiable, while a refutation of a fof problem shows the conjecture a theorem.

| outcome | cnf problem | fof problem |
|---|---|---|
| refutation | `Unsatisfiable` | `Theorem` |
| saturation | `Satisfiable` | `CounterSatisfiable` |
| budget exhausted | `GaveUp` | `GaveUp` |
*/

use crate::context::{Context, ContextState};

/// Whether a problem was stated in clause normal form or as full formulae.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ProblemKind {
    /// Every statement read was a cnf statement.
    #[default]
    Cnf,

    /// At least one fof statement was read.
    Fof,
}

/// High-level reports regarding a saturation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Report {
    /// The empty clause was derived.
    Refutation,

    /// The unprocessed set was exhausted.
    Saturation,

    /// A soft budget was exhausted.
    GaveUp,

    /// The saturation has not concluded.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(state: ContextState) -> Self {
        match state {
            ContextState::Input | ContextState::Saturating => Self::Unknown,
            ContextState::Refuted(_) => Self::Refutation,
            ContextState::Saturated => Self::Saturation,
            ContextState::GaveUp => Self::GaveUp,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refutation => write!(f, "Refutation"),
            Self::Saturation => write!(f, "Saturation"),
            Self::GaveUp => write!(f, "GaveUp"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Report {
    /// The SZS status for the report, given the kind of the problem.
    pub fn szs(&self, kind: ProblemKind) -> &'static str {
        match (self, kind) {
            (Self::Refutation, ProblemKind::Cnf) => "Unsatisfiable",
            (Self::Refutation, ProblemKind::Fof) => "Theorem",
            (Self::Saturation, ProblemKind::Cnf) => "Satisfiable",
            (Self::Saturation, ProblemKind::Fof) => "CounterSatisfiable",
            (Self::GaveUp, _) => "GaveUp",
            (Self::Unknown, _) => "Unknown",
        }
    }
}

impl Context {
    /// The lines of the refutation: every ancestor of the empty clause, in derivation order.
    ///
    /// Empty unless the context is refuted.
    pub fn refutation_lines(&self) -> Vec<String> {
        match self.state {
            ContextState::Refuted(empty_clause) => self.derivations.ancestor_lines(empty_clause),
            _ => Vec::new(),
        }
    }

    /// The lines of the saturated clause set, in identifier order.
    pub fn saturation_lines(&self) -> Vec<String> {
        self.clause_db
            .processed_clauses()
            .iter()
            .filter_map(|clause| self.derivations.line(clause.id))
            .map(str::to_string)
            .collect()
    }
}
