/*!
Literal selection.

Selection restricts the literals of a clause which may take part in inferences: when any literal of a clause is selected, only selected literals are [eligible](crate::structures::Clause::eligible_positions).

The policies select at most one *negative* literal --- the first, the smallest by weight, or the largest by weight --- and select nothing in a clause without negative literals.
This is negative selection, and it preserves refutational completeness: in any clause with a negative literal some negative literal is selected, and positive clauses stay fully eligible.

As an experiment switch, positive selection instead selects the first *positive* literal.
Completeness is not promised under positive selection.

The weight of a literal is `2·|function symbol occurrences| + 1·|variable occurrences|`, the constants shared with the symbol-count clause evaluation.

The bitmap for a clause is computed once, when the clause is activated by the [saturation loop](crate::procedures::saturate).
*/

use crate::{
    config::LiteralSelection,
    misc::log::targets,
    structures::clause::Clause,
};

/// The weight contributed by each function symbol occurrence.
pub const FUNCTION_WEIGHT: u32 = 2;

/// The weight contributed by each variable occurrence.
pub const VARIABLE_WEIGHT: u32 = 1;

/// The selection bitmap for `clause` under the given policy.
pub fn select_literals(clause: &Clause, policy: LiteralSelection, positive: bool) -> Vec<bool> {
    let mut bitmap = vec![false; clause.size()];

    if positive {
        if let Some(position) = clause.literals.iter().position(|literal| literal.polarity) {
            bitmap[position] = true;
        }
        return bitmap;
    }

    let negatives = || {
        clause
            .literals
            .iter()
            .enumerate()
            .filter(|(_, literal)| !literal.polarity)
    };

    let choice = match policy {
        LiteralSelection::None => None,

        LiteralSelection::First => negatives().map(|(position, _)| position).next(),

        LiteralSelection::Smallest => negatives()
            .min_by_key(|(_, literal)| literal.weight(FUNCTION_WEIGHT, VARIABLE_WEIGHT))
            .map(|(position, _)| position),

        LiteralSelection::Largest => negatives()
            .max_by_key(|(_, literal)| literal.weight(FUNCTION_WEIGHT, VARIABLE_WEIGHT))
            .map(|(position, _)| position),
    };

    if let Some(position) = choice {
        log::trace!(target: targets::SELECTION,
            "Selected literal {position} of c{}", clause.id);
        bitmap[position] = true;
    }

    bitmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{
        clause::{ClauseRole, ClauseSource},
        literal::Literal,
        term::{Term, Variable},
    };

    fn clause(literals: Vec<Literal>) -> Clause {
        Clause::new(literals, ClauseRole::Axiom, ClauseSource::Input { name: "t".to_string() })
    }

    fn heavy_negative() -> Literal {
        // Weight 2 + 2 + 2 = 6
        Literal::new(
            false,
            "p",
            vec![Term::Function("f".to_string(), vec![Term::constant("a")]), Term::constant("b")],
        )
    }

    fn light_negative() -> Literal {
        // Weight 1
        Literal::new(false, "q", vec![Term::Variable(Variable(0))])
    }

    #[test]
    fn no_selection_selects_nothing() {
        let clause = clause(vec![light_negative(), heavy_negative()]);
        let bitmap = select_literals(&clause, LiteralSelection::None, false);
        assert!(bitmap.iter().all(|selected| !selected));
    }

    #[test]
    fn first_negative() {
        let clause = clause(vec![
            Literal::new(true, "r", Vec::new()),
            heavy_negative(),
            light_negative(),
        ]);
        let bitmap = select_literals(&clause, LiteralSelection::First, false);
        assert_eq!(bitmap, vec![false, true, false]);
    }

    #[test]
    fn smallest_and_largest_by_weight() {
        let clause = clause(vec![heavy_negative(), light_negative()]);

        let smallest = select_literals(&clause, LiteralSelection::Smallest, false);
        assert_eq!(smallest, vec![false, true]);

        let largest = select_literals(&clause, LiteralSelection::Largest, false);
        assert_eq!(largest, vec![true, false]);
    }

    #[test]
    fn positive_clauses_stay_unselected() {
        let clause = clause(vec![Literal::new(true, "p", Vec::new())]);
        let bitmap = select_literals(&clause, LiteralSelection::First, false);
        assert_eq!(bitmap, vec![false]);
        assert_eq!(clause.eligible_positions(), vec![0]);
    }

    #[test]
    fn positive_selection_selects_the_first_positive() {
        let clause = clause(vec![light_negative(), Literal::new(true, "p", Vec::new())]);
        let bitmap = select_literals(&clause, LiteralSelection::None, true);
        assert_eq!(bitmap, vec![false, true]);
    }
}
