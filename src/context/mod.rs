/*!
The context --- to which clauses are added and within which saturation takes place.

A context owns everything a saturation touches: the [configuration](crate::config::Config), the [clause database](crate::db::clause::ClauseDB), the [derivation graph](crate::db::proof::DerivationGraph), the problem [signature](crate::builder::Signature), and the [counters](Counters) --- including the fresh-variable and clause-identifier counters, so two contexts over the same problem behave identically.

# Example

```rust
# use heron_fol::{config::Config, context::Context, reports::Report};
let mut ctx = Context::from_config(Config::default());

ctx.read_tptp("cnf(a, axiom, p(X) | q(X)). cnf(b, axiom, ~p(f(Y))). cnf(c, negated_conjecture, ~q(f(Z))).").unwrap();

assert!(ctx.saturate().is_ok());
assert_eq!(ctx.report(), Report::Refutation);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    builder::Signature,
    config::Config,
    db::{clause::ClauseDB, proof::DerivationGraph, ClauseKey},
    misc::log::targets,
    procedures::selection::{FUNCTION_WEIGHT, VARIABLE_WEIGHT},
    reports::{ProblemKind, Report},
    structures::clause::Clause,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A saturation is in progress.
    Saturating,

    /// The empty clause has been derived, with the noted identifier.
    Refuted(usize),

    /// The unprocessed set was exhausted without deriving the empty clause.
    Saturated,

    /// A soft budget was exhausted.
    GaveUp,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Saturating => write!(f, "Saturating"),
            Self::Refuted(_) => write!(f, "Refuted"),
            Self::Saturated => write!(f, "Saturated"),
            Self::GaveUp => write!(f, "GaveUp"),
        }
    }
}

/// The context in which a saturation takes place.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The unprocessed and processed clause sets.
    pub clause_db: ClauseDB,

    /// Records of every clause and the parent relation between them.
    pub derivations: DerivationGraph,

    /// The signature of the problem read so far.
    pub signature: Signature,

    /// Counters over the saturation, and the fresh-name state.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,

    /// Whether the problem is a cnf or fof problem, for SZS reporting.
    pub problem_kind: ProblemKind,

    /// Set once the equality axioms have been added.
    pub(crate) equality_axioms_added: bool,
}

impl Context {
    /// A fresh context from a configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            clause_db: ClauseDB::default(),
            derivations: DerivationGraph::default(),
            signature: Signature::default(),
            counters: Counters::default(),
            state: ContextState::Input,
            problem_kind: ProblemKind::Cnf,
            equality_axioms_added: false,
        }
    }

    /// The report corresponding to the current state.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// Stamps `clause` with an identifier, weight, and set-of-support tag, records its derivation, and inserts it into the unprocessed set.
    ///
    /// Recording the empty clause moves the context to [Refuted](ContextState::Refuted).
    pub fn record_clause(&mut self, mut clause: Clause, sos: bool) -> ClauseKey {
        clause.id = self.counters.next_clause_id();
        clause.weight = clause.symbol_weight(FUNCTION_WEIGHT, VARIABLE_WEIGHT);
        clause.sos = sos;

        self.derivations.record(&clause);
        self.counters.kept += 1;

        if clause.is_empty() {
            log::info!(target: targets::SATURATE, "Derived the empty clause as c{}", clause.id);
            self.state = ContextState::Refuted(clause.id);
        }

        self.clause_db.insert(clause)
    }
}
