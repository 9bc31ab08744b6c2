/*!
A library for saturation-based theorem proving in first-order logic with equality.

heron_fol attempts to refute a set of first-order clauses under the resolution calculus: clauses are read from a subset of the TPTP syntax, the negated conjecture is added to the axioms, and the empty clause is searched for by saturation.
Deriving the empty clause refutes the set; exhausting the search space without deriving it shows the set satisfiable.

heron_fol is developed to help researchers, developers, or anyone curious, to investigate proof search, whether as a novice or through implementing novel ideas.
Redundancy control comes from selection and subsumption rather than term indexing, so the loop stays small enough to read in one sitting.

# Orientation

The library is designed around the core structure of a [context](context::Context).

Clauses may be added through the [TPTP representation](context::Context::read_tptp) of a problem, or per statement through the [builder].

Internally, and at a high level, a saturation is viewed in terms of the movement of clauses between two sets:
- Unprocessed clauses wait in the [clause database](db::clause) to be picked as a *given clause*.
- Processed clauses have had every inference with one another computed.

Each iteration of the [saturation loop](procedures::saturate) picks a given clause by a [heuristic](config::ClauseHeuristic), generates its [resolvents and factors](procedures::resolution) against the processed set, and keeps the survivors of the [redundancy pipeline](procedures::subsumption).
Derivations are recorded in a [graph](db::proof), from which a refutation is read off once the empty clause appears.

Useful starting points:
- The high-level [saturate procedure](procedures::saturate) to inspect the dynamics of a saturation.
- The [structures] to familiarise yourself with terms, literals, substitutions, and clauses.
- The [configuration](config) to see which strategies are supported.

If you're in search of problems, consider the TPTP library at [tptp.org](https://www.tptp.org).

# Examples

+ Refute a contradictory pair of clauses.

```rust
# use heron_fol::{config::Config, context::Context, reports::Report};
let mut ctx = Context::from_config(Config::default());

ctx.read_tptp("cnf(a, axiom, p(X)). cnf(b, negated_conjecture, ~p(a)).").unwrap();

assert!(ctx.saturate().is_ok());
assert_eq!(ctx.report(), Report::Refutation);
assert_eq!(ctx.report().szs(ctx.problem_kind), "Unsatisfiable");
```

+ Saturate a satisfiable set.

```rust
# use heron_fol::{config::Config, context::Context, reports::Report};
let mut ctx = Context::from_config(Config::default());

ctx.read_tptp("cnf(a, axiom, p(a)). cnf(b, negated_conjecture, ~p(b)).").unwrap();

assert!(ctx.saturate().is_ok());
assert_eq!(ctx.report(), Report::Saturation);
assert_eq!(ctx.report().szs(ctx.problem_kind), "Satisfiable");
```

# Logs

To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
As logging is only built on request, and further can be requested by level, logs are verbose.

The targets are listed in [misc::log].

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Logs of each given clause can be found with `RUST_LOG=saturate=info …` or,
- Logs related to subsumption with `RUST_LOG=subsumption …`
*/

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod reports;

pub mod db;

pub mod misc;
