/*!
Literals --- atoms paired with a polarity.

An atom is a predicate symbol applied to argument terms, and a literal notes whether the atom occurs positively or negatively in a clause.

Two predicate symbols are distinguished:

- The equality predicate [EQUALITY] with arity 2.
  Equality literals are displayed infix, `s = t` when positive and `s != t` when negative, and argument order is kept for display even though `s = t` and `t = s` denote the same literal for the purpose of [subsumption](crate::procedures::subsumption).
- The propositional constants [TRUE] and [FALSE] with arity 0.
  The negation of `$true` is `$false` and vice versa, so [is_verum](Literal::is_verum) and [is_falsum](Literal::is_falsum) look through polarity.

# Example

```rust
# use heron_fol::structures::{Literal, Term, Variable};
let x = Term::Variable(Variable(0));
let literal = Literal::new(false, "p", vec![x]);

assert_eq!(format!("{literal}"), "~p(X0)");
assert_eq!(format!("{}", literal.negated()), "p(X0)");
assert!(literal.complements(&literal.negated()));
```
*/

use std::collections::BTreeSet;

use crate::structures::{
    substitution::Substitution,
    term::{Symbol, Term, Variable},
};

/// The distinguished equality predicate.
pub const EQUALITY: &str = "=";

/// The propositional constant for truth.
pub const TRUE: &str = "$true";

/// The propositional constant for falsity.
pub const FALSE: &str = "$false";

/// An atom paired with a polarity.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    /// Whether the atom occurs positively.
    pub polarity: bool,

    /// The predicate symbol of the atom.
    pub predicate: Symbol,

    /// The arguments of the atom.
    pub arguments: Vec<Term>,
}

impl Literal {
    /// A fresh literal, specified by pairing a polarity with a predicate application.
    pub fn new(polarity: bool, predicate: &str, arguments: Vec<Term>) -> Self {
        Literal {
            polarity,
            predicate: predicate.to_string(),
            arguments,
        }
    }

    /// An equality literal between `left` and `right`.
    pub fn equality(polarity: bool, left: Term, right: Term) -> Self {
        Literal {
            polarity,
            predicate: EQUALITY.to_string(),
            arguments: vec![left, right],
        }
    }

    /// The literal with opposite polarity.
    pub fn negated(&self) -> Self {
        Literal {
            polarity: !self.polarity,
            predicate: self.predicate.clone(),
            arguments: self.arguments.clone(),
        }
    }

    /// Whether the atom of the literal is the equality predicate.
    pub fn is_equality(&self) -> bool {
        self.predicate == EQUALITY
    }

    /// Whether the literal is `$true` or `$false`, under either polarity.
    pub fn is_propositional(&self) -> bool {
        self.predicate == TRUE || self.predicate == FALSE
    }

    /// Whether the literal is equivalent to `$true`, i.e. `$true` or `~$false`.
    pub fn is_verum(&self) -> bool {
        (self.polarity && self.predicate == TRUE) || (!self.polarity && self.predicate == FALSE)
    }

    /// Whether the literal is equivalent to `$false`, i.e. `$false` or `~$true`.
    pub fn is_falsum(&self) -> bool {
        (self.polarity && self.predicate == FALSE) || (!self.polarity && self.predicate == TRUE)
    }

    /// Whether `other` is the syntactic complement of the literal.
    pub fn complements(&self, other: &Literal) -> bool {
        self.polarity != other.polarity
            && self.predicate == other.predicate
            && self.arguments == other.arguments
    }

    /// Whether the literal is a positive equality between syntactically identical terms.
    pub fn is_trivial_equality(&self) -> bool {
        self.polarity
            && self.is_equality()
            && self.arguments.len() == 2
            && self.arguments[0] == self.arguments[1]
    }

    /// The result of applying `substitution` to every argument of the literal.
    pub fn substitute(&self, substitution: &Substitution) -> Literal {
        Literal {
            polarity: self.polarity,
            predicate: self.predicate.clone(),
            arguments: self.arguments.iter().map(|arg| substitution.apply(arg)).collect(),
        }
    }

    /// Collects every variable occurring in the literal into `collection`.
    pub fn collect_variables(&self, collection: &mut BTreeSet<Variable>) {
        for argument in &self.arguments {
            argument.collect_variables(collection);
        }
    }

    /// The symbol-count weight of the literal, as the sum of the weights of its arguments.
    pub fn weight(&self, function_weight: u32, variable_weight: u32) -> u32 {
        self.arguments
            .iter()
            .map(|arg| arg.weight(function_weight, variable_weight))
            .sum()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_equality() {
            let operator = if self.polarity { "=" } else { "!=" };
            return write!(f, "{}{}{}", self.arguments[0], operator, self.arguments[1]);
        }

        if !self.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}", self.predicate)?;
        if let Some((first, rest)) = self.arguments.split_first() {
            write!(f, "({first}")?;
            for argument in rest {
                write!(f, ",{argument}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let literal = Literal::new(true, "p", vec![Term::constant("a")]);
        assert_eq!(format!("{literal}"), "p(a)");
        assert_eq!(format!("{}", literal.negated()), "~p(a)");

        let equality = Literal::equality(false, Term::constant("a"), Term::constant("b"));
        assert_eq!(format!("{equality}"), "a!=b");
    }

    #[test]
    fn complements() {
        let literal = Literal::new(true, "q", vec![Term::Variable(Variable(2))]);
        assert!(literal.complements(&literal.negated()));
        assert!(!literal.complements(&literal));

        let other = Literal::new(false, "q", vec![Term::Variable(Variable(3))]);
        assert!(!literal.complements(&other));
    }

    #[test]
    fn propositional_constants() {
        let verum = Literal::new(true, TRUE, Vec::new());
        assert!(verum.is_verum());
        assert!(verum.negated().is_falsum());

        let falsum = Literal::new(true, FALSE, Vec::new());
        assert!(falsum.is_falsum());
        assert!(falsum.negated().is_verum());
    }

    #[test]
    fn trivial_equality() {
        let x = Term::Variable(Variable(0));
        assert!(Literal::equality(true, x.clone(), x.clone()).is_trivial_equality());
        assert!(!Literal::equality(false, x.clone(), x).is_trivial_equality());
        assert!(!Literal::equality(true, Term::constant("a"), Term::constant("b")).is_trivial_equality());
    }
}
