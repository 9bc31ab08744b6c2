/*!
The generating inferences: binary resolution and factoring.

**Binary resolution**.
Given clauses `C = L₁ ∨ R₁` and `D = L₂ ∨ R₂` over disjoint variables, with `L₁` and `L₂` of opposite polarity and equal predicate, and σ a most general unifier of the atoms of `L₁` and `L₂`, the resolvent `(R₁ ∨ R₂)σ` follows from `C` and `D`.
The caller supplies the side premiss as a [fresh-variable copy](crate::structures::Clause::fresh_variable_copy), so disjointness holds by construction.

**Factoring**.
Given a clause `C = L ∨ L' ∨ R` with `L` and `L'` of equal polarity and predicate, and σ a most general unifier of their atoms, the factor `(L ∨ R)σ` follows from `C`.

Both inferences respect literal selection: when a clause has selected literals, only [eligible positions](crate::structures::Clause::eligible_positions) take part.

Inferences are returned as bare literal lists paired with their [source](ClauseSource); recording them is the caller's concern.
*/

use crate::{
    misc::log::targets,
    procedures::unification::unify_term_lists,
    structures::{
        clause::{Clause, ClauseSource},
        literal::Literal,
    },
};

/// Every binary resolvent of `given` and `partner`, which must have disjoint variables.
pub fn resolvents(given: &Clause, partner: &Clause) -> Vec<(Vec<Literal>, ClauseSource)> {
    let mut inferred = Vec::new();

    for given_position in given.eligible_positions() {
        let given_literal = &given.literals[given_position];

        for partner_position in partner.eligible_positions() {
            let partner_literal = &partner.literals[partner_position];

            if given_literal.polarity == partner_literal.polarity
                || given_literal.predicate != partner_literal.predicate
            {
                continue;
            }

            let Some(unifier) =
                unify_term_lists(&given_literal.arguments, &partner_literal.arguments)
            else {
                continue;
            };

            let mut literals =
                Vec::with_capacity(given.literals.len() + partner.literals.len() - 2);
            for (position, literal) in given.literals.iter().enumerate() {
                if position != given_position {
                    literals.push(literal.substitute(&unifier));
                }
            }
            for (position, literal) in partner.literals.iter().enumerate() {
                if position != partner_position {
                    literals.push(literal.substitute(&unifier));
                }
            }

            log::trace!(target: targets::RESOLUTION,
                "Resolved c{} at {given_position} with c{} at {partner_position}",
                given.id, partner.id);

            inferred.push((
                literals,
                ClauseSource::Resolution {
                    left: given.id,
                    left_literal: given_position,
                    right: partner.id,
                    right_literal: partner_position,
                },
            ));
        }
    }

    inferred
}

/// Every factor of `given`.
pub fn factors(given: &Clause) -> Vec<(Vec<Literal>, ClauseSource)> {
    let mut inferred = Vec::new();
    let eligible = given.eligible_positions();

    for (index, &kept) in eligible.iter().enumerate() {
        let kept_literal = &given.literals[kept];

        for &merged in &eligible[index + 1..] {
            let merged_literal = &given.literals[merged];

            if kept_literal.polarity != merged_literal.polarity
                || kept_literal.predicate != merged_literal.predicate
            {
                continue;
            }

            let Some(unifier) =
                unify_term_lists(&kept_literal.arguments, &merged_literal.arguments)
            else {
                continue;
            };

            let literals = given
                .literals
                .iter()
                .enumerate()
                .filter_map(|(position, literal)| {
                    (position != merged).then(|| literal.substitute(&unifier))
                })
                .collect();

            log::trace!(target: targets::RESOLUTION,
                "Factored c{} merging {merged} into {kept}", given.id);

            inferred.push((
                literals,
                ClauseSource::Factoring {
                    parent: given.id,
                    kept,
                    merged,
                },
            ));
        }
    }

    inferred
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{
        clause::ClauseRole,
        term::{Term, Variable},
    };

    fn clause(literals: Vec<Literal>) -> Clause {
        Clause::new(literals, ClauseRole::Axiom, ClauseSource::Input { name: "t".to_string() })
    }

    fn var(n: u32) -> Term {
        Term::Variable(Variable(n))
    }

    #[test]
    fn simple_resolvent() {
        // p(X)|q(X) and ~p(a) resolve to q(a).
        let left = clause(vec![
            Literal::new(true, "p", vec![var(0)]),
            Literal::new(true, "q", vec![var(0)]),
        ]);
        let right = clause(vec![Literal::new(false, "p", vec![Term::constant("a")])]);

        let resolvents = resolvents(&left, &right);
        assert_eq!(resolvents.len(), 1);

        let (literals, _) = &resolvents[0];
        assert_eq!(literals, &vec![Literal::new(true, "q", vec![Term::constant("a")])]);
    }

    #[test]
    fn unit_resolution_to_the_empty_clause() {
        let left = clause(vec![Literal::new(true, "p", vec![Term::constant("a")])]);
        let right = clause(vec![Literal::new(false, "p", vec![var(0)])]);

        let resolvents = resolvents(&left, &right);
        assert_eq!(resolvents.len(), 1);
        assert!(resolvents[0].0.is_empty());
    }

    #[test]
    fn equal_polarities_do_not_resolve() {
        let left = clause(vec![Literal::new(true, "p", vec![var(0)])]);
        let right = clause(vec![Literal::new(true, "p", vec![Term::constant("a")])]);

        assert!(resolvents(&left, &right).is_empty());
    }

    #[test]
    fn selection_restricts_resolution() {
        // With only ~q selected in q-or-p, the p literal may not be resolved against.
        let mut left = clause(vec![
            Literal::new(false, "q", vec![var(0)]),
            Literal::new(true, "p", vec![var(0)]),
        ]);
        left.selected = vec![true, false];

        let against_p = clause(vec![Literal::new(false, "p", vec![Term::constant("a")])]);
        assert!(resolvents(&left, &against_p).is_empty());

        let against_q = clause(vec![Literal::new(true, "q", vec![Term::constant("a")])]);
        assert_eq!(resolvents(&left, &against_q).len(), 1);
    }

    #[test]
    fn simple_factor() {
        // p(X)|p(a)|q(X) factors to p(a)|q(a).
        let given = clause(vec![
            Literal::new(true, "p", vec![var(0)]),
            Literal::new(true, "p", vec![Term::constant("a")]),
            Literal::new(true, "q", vec![var(0)]),
        ]);

        let factors = factors(&given);
        assert_eq!(factors.len(), 1);

        let (literals, _) = &factors[0];
        assert_eq!(
            literals,
            &vec![
                Literal::new(true, "p", vec![Term::constant("a")]),
                Literal::new(true, "q", vec![Term::constant("a")]),
            ]
        );
    }

    #[test]
    fn opposite_polarities_do_not_factor() {
        let given = clause(vec![
            Literal::new(true, "p", vec![var(0)]),
            Literal::new(false, "p", vec![Term::constant("a")]),
        ]);
        assert!(factors(&given).is_empty());
    }

    #[test]
    fn resolvents_are_ground_consequences() {
        // All-ground check: r(a)|s(a) with ~r(a) leaves s(a), a consequence of the parents.
        let left = clause(vec![
            Literal::new(true, "r", vec![Term::constant("a")]),
            Literal::new(true, "s", vec![Term::constant("a")]),
        ]);
        let right = clause(vec![Literal::new(false, "r", vec![Term::constant("a")])]);

        let resolvents = resolvents(&left, &right);
        assert_eq!(resolvents.len(), 1);
        assert_eq!(resolvents[0].0, vec![Literal::new(true, "s", vec![Term::constant("a")])]);
    }
}
