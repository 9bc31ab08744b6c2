/*!
Substitutions --- finite maps from variables to terms.

A substitution is kept in an idempotent representation: no variable of the domain occurs in any term of the codomain.
[extend](Substitution::extend) preserves this by applying the fresh binding to the existing codomain before the binding is added, so a substitution built through `extend` may be applied once, rather than to a fixpoint.

Application is total.
A variable outside the domain is returned unchanged, and application distributes over the arguments of a function application.

Composition follows the convention `apply(compose(σ, τ), t) = apply(τ, apply(σ, t))`.
Trivial bindings `x ↦ x` are removed during composition.
*/

use std::collections::{BTreeSet, HashMap};

use crate::structures::term::{Term, Variable};

/// A finite map from variables to terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: HashMap<Variable, Term>,
}

impl Substitution {
    /// The identity substitution.
    pub fn empty() -> Self {
        Substitution {
            bindings: HashMap::new(),
        }
    }

    /// Whether the substitution is the identity substitution.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The number of variables bound.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// The term bound to `variable`, if the variable is in the domain.
    pub fn get(&self, variable: Variable) -> Option<&Term> {
        self.bindings.get(&variable)
    }

    /// Binds `variable` to `term` without further adjustment.
    ///
    /// Used when building renamings, where the codomain contains only fresh variables and idempotence is immediate.
    pub fn bind(&mut self, variable: Variable, term: Term) {
        self.bindings.insert(variable, term);
    }

    /// Extends the substitution with `variable ↦ term`, keeping the idempotent representation.
    ///
    /// The caller is responsible for the occurs check: `variable` must not occur in `term`.
    pub fn extend(&mut self, variable: Variable, term: Term) {
        let unit = Substitution {
            bindings: HashMap::from([(variable, term.clone())]),
        };
        for bound in self.bindings.values_mut() {
            *bound = unit.apply(bound);
        }
        self.bindings.insert(variable, term);
    }

    /// The result of applying the substitution to `term`.
    pub fn apply(&self, term: &Term) -> Term {
        match term {
            Term::Variable(v) => match self.bindings.get(v) {
                Some(bound) => bound.clone(),
                None => term.clone(),
            },

            Term::Function(symbol, args) => Term::Function(
                symbol.clone(),
                args.iter().map(|arg| self.apply(arg)).collect(),
            ),
        }
    }

    /// The composition ρ of `self` and `other`, with `apply(ρ, t) = apply(other, apply(self, t))`.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut bindings = HashMap::new();

        for (variable, term) in &self.bindings {
            let composed = other.apply(term);
            if composed != Term::Variable(*variable) {
                bindings.insert(*variable, composed);
            }
        }

        for (variable, term) in &other.bindings {
            if !self.bindings.contains_key(variable) && *term != Term::Variable(*variable) {
                bindings.insert(*variable, term.clone());
            }
        }

        Substitution { bindings }
    }

    /// A renaming of `variables` to fresh variables drawn from `fresh`, advancing the counter.
    pub fn renaming(variables: &BTreeSet<Variable>, fresh: &mut u32) -> Substitution {
        let mut renaming = Substitution::empty();
        for variable in variables {
            renaming.bind(*variable, Term::Variable(Variable(*fresh)));
            *fresh += 1;
        }
        renaming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Variable {
        Variable(0)
    }

    fn y() -> Variable {
        Variable(1)
    }

    #[test]
    fn identity_application() {
        let term = Term::Function("f".to_string(), vec![Term::Variable(x())]);
        assert_eq!(Substitution::empty().apply(&term), term);
    }

    #[test]
    fn application() {
        let mut sigma = Substitution::empty();
        sigma.extend(x(), Term::constant("a"));

        let term = Term::Function("f".to_string(), vec![Term::Variable(x()), Term::Variable(y())]);
        let expected = Term::Function("f".to_string(), vec![Term::constant("a"), Term::Variable(y())]);
        assert_eq!(sigma.apply(&term), expected);
    }

    #[test]
    fn extension_keeps_idempotence() {
        let mut sigma = Substitution::empty();
        sigma.extend(x(), Term::Function("f".to_string(), vec![Term::Variable(y())]));
        sigma.extend(y(), Term::constant("b"));

        // x now maps to f(b), so a single application suffices.
        let applied = sigma.apply(&Term::Variable(x()));
        assert_eq!(applied, Term::Function("f".to_string(), vec![Term::constant("b")]));
        assert_eq!(sigma.apply(&applied), applied);
    }

    #[test]
    fn composition_law() {
        let mut sigma = Substitution::empty();
        sigma.extend(x(), Term::Function("f".to_string(), vec![Term::Variable(y())]));

        let mut tau = Substitution::empty();
        tau.extend(y(), Term::constant("a"));

        let composed = sigma.compose(&tau);
        let term = Term::Function("g".to_string(), vec![Term::Variable(x()), Term::Variable(y())]);

        assert_eq!(composed.apply(&term), tau.apply(&sigma.apply(&term)));
    }

    #[test]
    fn composition_removes_trivial_bindings() {
        let mut sigma = Substitution::empty();
        sigma.extend(x(), Term::Variable(y()));

        let mut tau = Substitution::empty();
        tau.extend(y(), Term::Variable(x()));

        // σ sends x to y and τ sends y back to x.
        let composed = sigma.compose(&tau);
        assert_eq!(composed.get(x()), None);
        assert_eq!(composed.get(y()), Some(&Term::Variable(x())));
    }

    #[test]
    fn renaming_is_fresh() {
        let mut counter = 10;
        let variables = BTreeSet::from([x(), y()]);
        let renaming = Substitution::renaming(&variables, &mut counter);

        assert_eq!(counter, 12);
        assert_eq!(renaming.get(x()), Some(&Term::Variable(Variable(10))));
        assert_eq!(renaming.get(y()), Some(&Term::Variable(Variable(11))));
    }
}
