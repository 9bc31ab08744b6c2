/*!
The given-clause saturation loop.

# Overview

Saturation maintains two clause sets: the *unprocessed* set, holding clauses not yet examined, and the *processed* set, closed under inferences between its members.
Each iteration picks a *given clause* from the unprocessed set and moves the inference frontier forward by one clause:

```none
          +------------------+
  +-------| pick given G     |-----> saturated, if the unprocessed set is empty
  |       +------------------+
  |               |
  |               | unless G is subsumed by a processed clause
  |               ⌄
  |       +------------------+
  |       | activate G       |  selection bitmap, backward subsumption, into the processed set
  |       +------------------+
  |               |
  |               ⌄
  |       +------------------+
  +-------| infer            |-----> refuted, on deriving the empty clause
          +------------------+
```

Inferring computes every factor of the given clause and every resolvent of the given clause with a processed clause --- the given clause included, through a fresh-variable copy --- and passes each through the redundancy pipeline:

1. Tautologies are discarded.
2. *Forward subsumption*: a clause subsumed by any kept clause is discarded.
3. *Backward subsumption*: kept clauses properly subsumed by the new clause are removed.
4. The survivor enters the unprocessed set.

Soft budgets --- wall time and generated-clause count --- are checked at the top of each iteration, and exhausting one ends the saturation with a [GaveUp](crate::reports::Report::GaveUp) report rather than an error.

Under the set-of-support restriction, resolution between two clauses outside the support set is skipped.
Factors are always computed: a factor follows from its single parent, so the satisfiability of the non-support part is untouched.

# Determinism

A saturation is deterministic: the pick is deterministic with ties broken by clause identifier, clause identifiers and fresh variables are drawn from per-context counters, and no step consults an unordered collection.
Two runs over the same input and configuration produce the same derivation, clause for clause.
*/

use crate::{
    context::{Context, ContextState},
    misc::log::targets,
    procedures::{
        resolution::{factors, resolvents},
        selection::select_literals,
    },
    reports::Report,
    structures::{
        clause::{Clause, ClauseRole, ClauseSource},
        literal::Literal,
    },
    types::err::ErrorKind,
};

impl Context {
    /// Saturates the clause set, returning the report of the outcome.
    pub fn saturate(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Refuted(_) | ContextState::Saturated | ContextState::GaveUp => {
                return Ok(self.report());
            }

            ContextState::Input => {
                self.add_equality_axioms();
                self.state = ContextState::Saturating;
            }

            ContextState::Saturating => {}
        }

        let timer = std::time::Instant::now();

        'given_loop: loop {
            self.counters.iterations += 1;
            self.counters.time = timer.elapsed();

            // An empty input clause refutes without a pick.
            if let ContextState::Refuted(_) = self.state {
                break 'given_loop;
            }

            if let Some(limit) = self.config.time_limit {
                if self.counters.time > limit {
                    log::info!(target: targets::SATURATE, "Time budget exhausted");
                    self.state = ContextState::GaveUp;
                    break 'given_loop;
                }
            }

            if let Some(limit) = self.config.clause_limit {
                if self.counters.generated > limit {
                    log::info!(target: targets::SATURATE, "Clause budget exhausted");
                    self.state = ContextState::GaveUp;
                    break 'given_loop;
                }
            }

            let Some(given_key) =
                self.clause_db.pick_given(&self.config.heuristic, &mut self.counters.picks)
            else {
                self.state = ContextState::Saturated;
                break 'given_loop;
            };

            // A picked key always unlocks a clause; anything else is an internal fault.
            let Some(given) = self.clause_db.get(given_key) else {
                return Err(crate::types::err::ClauseDBError::Missing.into());
            };
            let mut given = given.clone();

            // The tautology test guards generated clauses only; an input tautology
            // such as the reflexivity axiom is processed as any other given.
            if self.config.forward_subsumption {
                if let Some(subsumer) = self.clause_db.subsumed_by_processed(&given) {
                    log::debug!(target: targets::SUBSUMPTION,
                        "Given c{} forward subsumed by c{subsumer}", given.id);
                    self.counters.forward_subsumed += 1;
                    self.clause_db.remove(given_key);
                    continue 'given_loop;
                }
            }

            // Activation: the selection bitmap is computed once, here.
            given.selected = select_literals(
                &given,
                self.config.literal_selection,
                self.config.positive_selection,
            );
            self.clause_db.set_selection(given_key, given.selected.clone());
            self.clause_db.activate(given_key);

            if self.config.backward_subsumption {
                self.counters.backward_subsumed +=
                    self.clause_db.backward_subsume(&given, Some(given_key));
            }

            log::info!(target: targets::SATURATE,
                "Iteration {}, given c{}: {given}", self.counters.iterations, given.id);

            for (literals, source) in factors(&given) {
                self.process_inferred(literals, source, given.sos);
            }
            if let ContextState::Refuted(_) = self.state {
                break 'given_loop;
            }

            'partner_loop: for partner_key in self.clause_db.processed_snapshot() {
                // Backward subsumption may have removed the partner mid-walk.
                let Some(partner) = self.clause_db.get(partner_key) else {
                    continue 'partner_loop;
                };

                if self.config.set_of_support && !given.sos && !partner.sos {
                    continue 'partner_loop;
                }

                let partner = partner.fresh_variable_copy(&mut self.counters.fresh_variable);
                let sos = given.sos || partner.sos;

                for (literals, source) in resolvents(&given, &partner) {
                    self.process_inferred(literals, source, sos);
                    if let ContextState::Refuted(_) = self.state {
                        break 'given_loop;
                    }
                }
            }
        }

        self.counters.time = timer.elapsed();
        Ok(self.report())
    }

    /// Passes a freshly inferred clause through the redundancy pipeline.
    fn process_inferred(&mut self, literals: Vec<Literal>, source: ClauseSource, sos: bool) {
        self.counters.generated += 1;
        let clause = Clause::new(literals, ClauseRole::Plain, source);

        if clause.is_empty() {
            self.record_clause(clause, sos);
            return;
        }

        if clause.is_tautology() {
            log::trace!(target: targets::SATURATE, "Tautology discarded: {clause}");
            self.counters.tautologies += 1;
            return;
        }

        if self.config.forward_subsumption {
            if let Some(subsumer) = self.clause_db.subsumed_by_any(&clause) {
                log::trace!(target: targets::SUBSUMPTION,
                    "Forward subsumed by c{subsumer}: {clause}");
                self.counters.forward_subsumed += 1;
                return;
            }
        }

        if self.config.backward_subsumption {
            self.counters.backward_subsumed += self.clause_db.backward_subsume(&clause, None);
        }

        self.record_clause(clause, sos);
    }
}
