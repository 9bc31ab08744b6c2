/*!
Subsumption between clauses.

A clause *C* subsumes a clause *D* when there is a substitution σ with *Cσ* a sub-multiset of *D*.
Subsumed clauses are redundant: anything derivable with *D* is derivable with the more general *C*.

The test is a backtracking multiset match.
Literals of *C* are matched against unused literals of *D* in order, through one-sided [matching](Matcher) --- only variables of *C* may be bound, and a variable of *C* is bound at most once.
Equality literals are tried in both argument orientations, as `s = t` and `t = s` denote the same literal for this purpose.

Consequences kept in mind by callers:

- The empty clause subsumes every clause, and subsumption is reflexive.
- Backward replacement uses [proper subsumption](properly_subsumes) --- subsumed but not subsuming back --- so a pair of clauses equal up to renaming never delete one another.
*/

use std::collections::HashMap;

use crate::structures::{
    clause::Clause,
    literal::Literal,
    term::{Term, Variable},
};

/// Bindings for one-sided matching, with a trail for backtracking.
#[derive(Default)]
struct Matcher {
    bindings: HashMap<Variable, Term>,
    trail: Vec<Variable>,
}

impl Matcher {
    /// A mark into the trail, for later [backtracking](Self::undo_to).
    fn mark(&self) -> usize {
        self.trail.len()
    }

    /// Removes every binding made after `mark` was taken.
    fn undo_to(&mut self, mark: usize) {
        while self.trail.len() > mark {
            let variable = self.trail.pop().expect("trail length checked");
            self.bindings.remove(&variable);
        }
    }

    /// Extends the bindings so `pattern` becomes syntactically equal to `target`, binding variables of `pattern` only.
    fn match_terms(&mut self, pattern: &Term, target: &Term) -> bool {
        match pattern {
            Term::Variable(x) => match self.bindings.get(x) {
                Some(bound) => bound == target,
                None => {
                    self.bindings.insert(*x, target.clone());
                    self.trail.push(*x);
                    true
                }
            },

            Term::Function(f, f_args) => match target {
                Term::Variable(_) => false,
                Term::Function(g, g_args) => {
                    f == g
                        && f_args.len() == g_args.len()
                        && f_args.iter().zip(g_args).all(|(p, t)| self.match_terms(p, t))
                }
            },
        }
    }

    /// Matches the paired terms of two argument lists of equal length.
    fn match_term_lists(&mut self, pattern: &[Term], target: &[Term]) -> bool {
        pattern.iter().zip(target).all(|(p, t)| self.match_terms(p, t))
    }
}

/// Whether some instance of `general` is a sub-multiset of `specific`.
pub fn subsumes(general: &Clause, specific: &Clause) -> bool {
    // A multiset embedding is injective on positions.
    if general.size() > specific.size() {
        return false;
    }

    let mut matcher = Matcher::default();
    let mut used = vec![false; specific.size()];
    embed_from(0, general, specific, &mut used, &mut matcher)
}

/// Whether `general` subsumes `specific` and not conversely.
pub fn properly_subsumes(general: &Clause, specific: &Clause) -> bool {
    subsumes(general, specific) && !subsumes(specific, general)
}

/// Matches literals of `general` from `position` on into unused literals of `specific`, backtracking through `matcher`.
fn embed_from(
    position: usize,
    general: &Clause,
    specific: &Clause,
    used: &mut [bool],
    matcher: &mut Matcher,
) -> bool {
    let Some(literal) = general.literals.get(position) else {
        return true;
    };

    for (target_position, target) in specific.literals.iter().enumerate() {
        if used[target_position]
            || literal.polarity != target.polarity
            || literal.predicate != target.predicate
            || literal.arguments.len() != target.arguments.len()
        {
            continue;
        }

        for orientation in orientations(literal, target) {
            let mark = matcher.mark();

            if matcher.match_term_lists(&literal.arguments, &orientation) {
                used[target_position] = true;
                if embed_from(position + 1, general, specific, used, matcher) {
                    return true;
                }
                used[target_position] = false;
            }

            matcher.undo_to(mark);
        }
    }

    false
}

/// The argument orders of `target` to try: as written, and flipped for equality literals.
fn orientations(literal: &Literal, target: &Literal) -> Vec<Vec<Term>> {
    let mut orders = vec![target.arguments.clone()];
    if literal.is_equality() && target.arguments.len() == 2 {
        orders.push(vec![target.arguments[1].clone(), target.arguments[0].clone()]);
    }
    orders
}
