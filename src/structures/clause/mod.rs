/*!
Clauses --- finite multisets of literals, interpreted as the disjunction of those literals.

The empty clause is always false, and deriving it closes a refutation.

A clause carries metadata alongside its literals:

- An **identifier**, unique within a context and stamped when the clause is [recorded](crate::context::Context::record_clause).
  Identifiers increase with creation, so the identifier order of a derivation is a topological order of its parent relation.
- A **role** and a **source**, for reporting.
- A **selection bitmap**, set once when the clause is activated.
  If any literal is selected, only selected literals are eligible for inferences.
- An **evaluation weight**, computed once on insertion and read by the clause-selection heuristics.
- A **set-of-support tag**, true for negated-conjecture clauses and inherited by any clause with a tagged parent.

Apart from the one-time selection and stamping, clauses are immutable.
*/

mod source;
pub use source::{ClauseRole, ClauseSource};

use std::collections::BTreeSet;

use crate::structures::{
    literal::Literal,
    substitution::Substitution,
    term::Variable,
};

/// A multiset of literals with derivation metadata.
#[derive(Clone, Debug)]
pub struct Clause {
    /// The identifier of the clause, unique within a context.
    pub id: usize,

    /// The literals of the clause.
    pub literals: Vec<Literal>,

    /// The TPTP role of the clause.
    pub role: ClauseRole,

    /// How the clause came to be.
    pub source: ClauseSource,

    /// The selection bitmap, parallel to [literals](Self::literals) once set.
    pub selected: Vec<bool>,

    /// The evaluation weight read by clause-selection heuristics.
    pub weight: u32,

    /// Whether the clause descends from the negated conjecture.
    pub sos: bool,
}

impl Clause {
    /// A fresh clause over the given literals, prior to being recorded in a context.
    pub fn new(literals: Vec<Literal>, role: ClauseRole, source: ClauseSource) -> Self {
        Clause {
            id: 0,
            literals,
            role,
            source,
            selected: Vec::new(),
            weight: 0,
            sos: false,
        }
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is a tautology: a syntactically complementary pair of literals, a trivial equality `s = s`, or a literal equivalent to `$true`.
    pub fn is_tautology(&self) -> bool {
        for (position, literal) in self.literals.iter().enumerate() {
            if literal.is_verum() || literal.is_trivial_equality() {
                return true;
            }
            for other in &self.literals[position + 1..] {
                if literal.complements(other) {
                    return true;
                }
            }
        }
        false
    }

    /// Collects every variable occurring in the clause into `collection`.
    pub fn collect_variables(&self, collection: &mut BTreeSet<Variable>) {
        for literal in &self.literals {
            literal.collect_variables(collection);
        }
    }

    /// The symbol-count weight of the clause.
    pub fn symbol_weight(&self, function_weight: u32, variable_weight: u32) -> u32 {
        self.literals
            .iter()
            .map(|literal| literal.weight(function_weight, variable_weight))
            .sum()
    }

    /// The result of applying `substitution` to every literal of the clause.
    pub fn substitute(&self, substitution: &Substitution) -> Clause {
        Clause {
            literals: self
                .literals
                .iter()
                .map(|literal| literal.substitute(substitution))
                .collect(),
            ..self.clone()
        }
    }

    /// A copy of the clause with every variable replaced by a globally fresh variable.
    ///
    /// Taken before each resolution so the side premiss shares no variable with the given clause.
    pub fn fresh_variable_copy(&self, fresh: &mut u32) -> Clause {
        let mut variables = BTreeSet::new();
        self.collect_variables(&mut variables);
        let renaming = Substitution::renaming(&variables, fresh);
        self.substitute(&renaming)
    }

    /// The literal positions eligible for inferences: the selected positions if any literal is selected, and every position otherwise.
    pub fn eligible_positions(&self) -> Vec<usize> {
        if self.selected.iter().any(|selected| *selected) {
            self.selected
                .iter()
                .enumerate()
                .filter_map(|(position, selected)| selected.then_some(position))
                .collect()
        } else {
            (0..self.literals.len()).collect()
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.literals.split_first() {
            None => write!(f, "$false"),

            Some((first, rest)) => {
                write!(f, "{first}")?;
                for literal in rest {
                    write!(f, "|{literal}")?;
                }
                Ok(())
            }
        }
    }
}
