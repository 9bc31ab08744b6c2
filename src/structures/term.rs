/*!
Terms --- variables and function applications.

A term is either a [variable](Variable) or a function symbol applied to a (possibly empty) list of argument terms.
Constants are 0-ary function applications.

Variables are numbered by the context rather than named.
Every clause admitted to a context has the variable names of its source replaced by fresh numbered variables, so no two clauses of a context share a variable, and a fresh copy of a clause never collides with the variables of any other clause.
The display form of variable *n* is `Xn`, which keeps every printed clause within the TPTP convention of upper-case variable names.

Terms are immutable values: every operation which would change a term builds a fresh term.

# Example

```rust
# use heron_fol::structures::{Term, Variable};
let x = Term::Variable(Variable(3));
let constant = Term::constant("a");
let term = Term::Function("f".to_string(), vec![x.clone(), constant]);

assert_eq!(format!("{term}"), "f(X3,a)");
assert!(!term.is_ground());
assert!(term.contains_variable(Variable(3)));
```
*/

/// The name of a function or predicate symbol.
pub type Symbol = String;

/// A variable, numbered by the context which owns it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable(pub u32);

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X{}", self.0)
    }
}

/// A first-order term.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Term {
    /// A variable.
    Variable(Variable),

    /// A function symbol applied to argument terms, with constants as the 0-ary case.
    Function(Symbol, Vec<Term>),
}

impl Term {
    /// The term given by applying a 0-ary function symbol.
    pub fn constant(name: &str) -> Self {
        Term::Function(name.to_string(), Vec::new())
    }

    /// Whether the term contains no variables.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Function(_, args) => args.iter().all(Term::is_ground),
        }
    }

    /// Whether `variable` occurs in the term.
    pub fn contains_variable(&self, variable: Variable) -> bool {
        match self {
            Term::Variable(v) => *v == variable,
            Term::Function(_, args) => args.iter().any(|arg| arg.contains_variable(variable)),
        }
    }

    /// Collects every variable occurring in the term into `collection`.
    pub fn collect_variables(&self, collection: &mut std::collections::BTreeSet<Variable>) {
        match self {
            Term::Variable(v) => {
                collection.insert(*v);
            }

            Term::Function(_, args) => {
                for arg in args {
                    arg.collect_variables(collection);
                }
            }
        }
    }

    /// The symbol-count weight of the term: `function_weight` per function symbol occurrence plus `variable_weight` per variable occurrence.
    pub fn weight(&self, function_weight: u32, variable_weight: u32) -> u32 {
        match self {
            Term::Variable(_) => variable_weight,

            Term::Function(_, args) => args
                .iter()
                .fold(function_weight, |total, arg| total + arg.weight(function_weight, variable_weight)),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{v}"),

            Term::Function(symbol, args) => {
                write!(f, "{symbol}")?;
                if let Some((first, rest)) = args.split_first() {
                    write!(f, "({first}")?;
                    for arg in rest {
                        write!(f, ",{arg}")?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let term = Term::Function(
            "g".to_string(),
            vec![Term::constant("a"), Term::Variable(Variable(0))],
        );
        assert_eq!(format!("{term}"), "g(a,X0)");
        assert_eq!(format!("{}", Term::constant("c")), "c");
    }

    #[test]
    fn ground_and_occurrence() {
        let term = Term::Function("f".to_string(), vec![Term::Variable(Variable(7))]);
        assert!(!term.is_ground());
        assert!(term.contains_variable(Variable(7)));
        assert!(!term.contains_variable(Variable(8)));
        assert!(Term::constant("a").is_ground());
    }

    #[test]
    fn weights() {
        // f(X, g(a)) counts three function symbols and one variable.
        let term = Term::Function(
            "f".to_string(),
            vec![
                Term::Variable(Variable(1)),
                Term::Function("g".to_string(), vec![Term::constant("a")]),
            ],
        );
        assert_eq!(term.weight(2, 1), 7);
        assert_eq!(term.weight(1, 0), 3);
    }
}
