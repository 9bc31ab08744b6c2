/*!
Equality axiomatization.

Equality is handled by axioms rather than a dedicated inference.
When the equality predicate occurs in the problem and the axioms are enabled, the following clauses are added exactly once, before saturation starts:

- Reflexivity: `X = X`.
- Symmetry: `X != Y | Y = X`.
- Transitivity: `X != Y | Y != Z | X = Z`.
- For every function symbol `f` of arity `n ≥ 1`: `X1 != Y1 | … | Xn != Yn | f(X̄) = f(Ȳ)`.
- For every predicate symbol `p` of arity `n ≥ 1`: `X1 != Y1 | … | Xn != Yn | ~p(X̄) | p(Ȳ)`.

Constants need no congruence axiom --- `a = a` is an instance of reflexivity --- and the signature is walked in name order, so the axiom list is deterministic.
*/

use crate::{
    builder::Signature,
    context::{Context, Counters},
    misc::log::targets,
    structures::{
        clause::{Clause, ClauseRole, ClauseSource},
        literal::Literal,
        term::Term,
    },
};

impl Context {
    /// Adds the equality axioms for the signature read so far, once.
    ///
    /// Nothing is added unless the configuration asks for the axioms and the problem uses equality.
    pub(crate) fn add_equality_axioms(&mut self) {
        if self.equality_axioms_added
            || !self.config.equality_axioms
            || !self.signature.uses_equality()
        {
            return;
        }
        self.equality_axioms_added = true;

        let axioms = equality_axioms(&self.signature, &mut self.counters);
        log::info!(target: targets::EQUALITY, "Adding {} equality axioms", axioms.len());

        for literals in axioms {
            let clause = Clause::new(literals, ClauseRole::Axiom, ClauseSource::EqualityAxiom);
            self.record_clause(clause, false);
        }
    }
}

/// The equality axiom clauses for `signature`, over variables fresh from `counters`.
fn equality_axioms(signature: &Signature, counters: &mut Counters) -> Vec<Vec<Literal>> {
    let mut axioms = Vec::new();

    let x = Term::Variable(counters.next_variable());
    axioms.push(vec![Literal::equality(true, x.clone(), x)]);

    let x = Term::Variable(counters.next_variable());
    let y = Term::Variable(counters.next_variable());
    axioms.push(vec![
        Literal::equality(false, x.clone(), y.clone()),
        Literal::equality(true, y, x),
    ]);

    let x = Term::Variable(counters.next_variable());
    let y = Term::Variable(counters.next_variable());
    let z = Term::Variable(counters.next_variable());
    axioms.push(vec![
        Literal::equality(false, x.clone(), y.clone()),
        Literal::equality(false, y, z.clone()),
        Literal::equality(true, x, z),
    ]);

    for (symbol, arity) in signature.functions() {
        if arity == 0 {
            continue;
        }

        let (mut literals, left, right) = argument_disagreements(arity, counters);
        literals.push(Literal::equality(
            true,
            Term::Function(symbol.to_string(), left),
            Term::Function(symbol.to_string(), right),
        ));
        axioms.push(literals);
    }

    for (symbol, arity) in signature.predicates() {
        if arity == 0 {
            continue;
        }

        let (mut literals, left, right) = argument_disagreements(arity, counters);
        literals.push(Literal::new(false, symbol, left));
        literals.push(Literal::new(true, symbol, right));
        axioms.push(literals);
    }

    axioms
}

/// `arity` many disequations `Xi != Yi`, together with the argument lists `X̄` and `Ȳ`.
fn argument_disagreements(
    arity: usize,
    counters: &mut Counters,
) -> (Vec<Literal>, Vec<Term>, Vec<Term>) {
    let mut literals = Vec::with_capacity(arity + 2);
    let mut left = Vec::with_capacity(arity);
    let mut right = Vec::with_capacity(arity);

    for _ in 0..arity {
        let x = Term::Variable(counters.next_variable());
        let y = Term::Variable(counters.next_variable());
        literals.push(Literal::equality(false, x.clone(), y.clone()));
        left.push(x);
        right.push(y);
    }

    (literals, left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SymbolKind;

    #[test]
    fn base_axioms_without_symbols() {
        let mut signature = Signature::default();
        signature.note_equality();

        let mut counters = Counters::default();
        let axioms = equality_axioms(&signature, &mut counters);

        // Reflexivity, symmetry, transitivity.
        assert_eq!(axioms.len(), 3);
        assert_eq!(axioms[0].len(), 1);
        assert_eq!(axioms[1].len(), 2);
        assert_eq!(axioms[2].len(), 3);
        assert!(axioms[0][0].is_trivial_equality());
    }

    #[test]
    fn congruence_axioms_per_symbol() {
        let mut signature = Signature::default();
        signature.note_equality();
        signature.register("f", SymbolKind::Function, 2).expect("registers");
        signature.register("a", SymbolKind::Function, 0).expect("registers");
        signature.register("p", SymbolKind::Predicate, 1).expect("registers");

        let mut counters = Counters::default();
        let axioms = equality_axioms(&signature, &mut counters);

        // Three base axioms, one for f, one for p, none for the constant a.
        assert_eq!(axioms.len(), 5);

        let function_congruence = &axioms[3];
        assert_eq!(function_congruence.len(), 3);
        assert!(function_congruence[2].is_equality());
        assert!(function_congruence[2].polarity);

        let predicate_congruence = &axioms[4];
        assert_eq!(predicate_congruence.len(), 3);
        assert_eq!(predicate_congruence[1].predicate, "p");
        assert!(!predicate_congruence[1].polarity);
        assert!(predicate_congruence[2].polarity);
    }

    #[test]
    fn axioms_are_added_once_and_only_on_request() {
        use crate::config::Config;

        let mut ctx = Context::from_config(Config { equality_axioms: true, ..Config::default() });
        ctx.read_tptp("cnf(a, axiom, f(a) = b).").expect("reads");

        ctx.add_equality_axioms();
        let after_first = ctx.counters.kept;
        ctx.add_equality_axioms();
        assert_eq!(ctx.counters.kept, after_first);

        // The input clause, reflexivity, symmetry, transitivity, and congruence for f.
        assert_eq!(after_first, 5);

        let mut without = Context::from_config(Config::default());
        without.read_tptp("cnf(a, axiom, f(a) = b).").expect("reads");
        without.add_equality_axioms();
        assert_eq!(without.counters.kept, 1);
    }
}
