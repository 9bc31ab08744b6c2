/*!
Syntactic unification of terms and literals.

[unify_terms] computes a most general unifier of two terms by recursive descent on the term structure, with the occurs check enabled:

1. If either side dereferences to a variable `x` distinct from the other side `u`, unification fails if `x` occurs in `u`, and otherwise the unifier is extended with `x ↦ u`.
2. If both sides are applications with the same symbol and arity, the argument lists are unified pairwise.
3. Identical variables on both sides are skipped.

A returned unifier is idempotent --- [extend](Substitution::extend) applies each fresh binding to the codomain of the bindings made so far --- and most general, as only forced bindings are ever made.

A failure to unify is an expected outcome, not an error, so the result is an [Option].
*/

use crate::structures::{
    literal::Literal,
    substitution::Substitution,
    term::Term,
};

/// A most general unifier of `left` and `right`, if one exists.
pub fn unify_terms(left: &Term, right: &Term) -> Option<Substitution> {
    let mut unifier = Substitution::empty();
    match unify_with(left, right, &mut unifier) {
        true => Some(unifier),
        false => None,
    }
}

/// A most general simultaneous unifier of the paired terms of `left` and `right`, if one exists.
pub fn unify_term_lists(left: &[Term], right: &[Term]) -> Option<Substitution> {
    if left.len() != right.len() {
        return None;
    }

    let mut unifier = Substitution::empty();
    for (l, r) in left.iter().zip(right) {
        if !unify_with(l, r, &mut unifier) {
            return None;
        }
    }
    Some(unifier)
}

/// A most general unifier of two literals, requiring the polarities and predicates to match.
pub fn unify_literals(left: &Literal, right: &Literal) -> Option<Substitution> {
    if left.polarity != right.polarity || left.predicate != right.predicate {
        return None;
    }
    unify_term_lists(&left.arguments, &right.arguments)
}

/// Extends `unifier` to a unifier of `left` and `right`, or returns false leaving `unifier` part-built.
fn unify_with(left: &Term, right: &Term, unifier: &mut Substitution) -> bool {
    // Dereference through the bindings made so far, then examine the disagreement.
    let left = unifier.apply(left);
    let right = unifier.apply(right);

    match (left, right) {
        (Term::Variable(x), Term::Variable(y)) if x == y => true,

        (Term::Variable(x), u) | (u, Term::Variable(x)) => {
            if u.contains_variable(x) {
                return false;
            }
            unifier.extend(x, u);
            true
        }

        (Term::Function(f, f_args), Term::Function(g, g_args)) => {
            if f != g || f_args.len() != g_args.len() {
                return false;
            }
            f_args
                .iter()
                .zip(&g_args)
                .all(|(l, r)| unify_with(l, r, unifier))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::term::Variable;

    fn var(n: u32) -> Term {
        Term::Variable(Variable(n))
    }

    fn app(symbol: &str, args: Vec<Term>) -> Term {
        Term::Function(symbol.to_string(), args)
    }

    #[test]
    fn unifier_solves() {
        // f(X, g(Y)) against f(a, Z)
        let left = app("f", vec![var(0), app("g", vec![var(1)])]);
        let right = app("f", vec![Term::constant("a"), var(2)]);

        let unifier = unify_terms(&left, &right).expect("unifiable");
        assert_eq!(unifier.apply(&left), unifier.apply(&right));
    }

    #[test]
    fn unifier_is_idempotent() {
        // f(X, X) against f(Y, g(Z)) forces X and Y through g(Z).
        let left = app("f", vec![var(0), var(0)]);
        let right = app("f", vec![var(1), app("g", vec![var(2)])]);

        let unifier = unify_terms(&left, &right).expect("unifiable");
        let applied = unifier.apply(&left);
        assert_eq!(unifier.apply(&applied), applied);
    }

    #[test]
    fn occurs_check() {
        // X against f(X) must fail.
        let left = var(0);
        let right = app("f", vec![var(0)]);
        assert!(unify_terms(&left, &right).is_none());
        assert!(unify_terms(&right, &left).is_none());
    }

    #[test]
    fn clashes_fail() {
        assert!(unify_terms(&Term::constant("a"), &Term::constant("b")).is_none());

        let unary = app("f", vec![Term::constant("a")]);
        let binary = app("f", vec![Term::constant("a"), Term::constant("a")]);
        assert!(unify_terms(&unary, &binary).is_none());
    }

    #[test]
    fn identical_variables_unify_without_bindings() {
        let unifier = unify_terms(&var(4), &var(4)).expect("unifiable");
        assert!(unifier.is_empty());
    }

    #[test]
    fn literal_unification_requires_matching_signs() {
        let positive = Literal::new(true, "p", vec![var(0)]);
        let negative = Literal::new(false, "p", vec![Term::constant("a")]);

        assert!(unify_literals(&positive, &negative).is_none());
        assert!(unify_literals(&positive, &negative.negated()).is_some());
    }

    #[test]
    fn transitive_bindings_resolve() {
        // f(X, Y) against f(Y, a): X and Y both end at a.
        let left = app("f", vec![var(0), var(1)]);
        let right = app("f", vec![var(1), Term::constant("a")]);

        let unifier = unify_terms(&left, &right).expect("unifiable");
        assert_eq!(unifier.apply(&var(0)), Term::constant("a"));
        assert_eq!(unifier.apply(&var(1)), Term::constant("a"));
    }
}
