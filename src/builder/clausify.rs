/*!
Clausification --- the transformation from fof formulae to clauses.

The passes, in order:

1. **Closure**. Free variables are implicitly universally quantified, so the formula is closed under a universal prefix before anything else.
   Closing before negation is what turns the free variables of a conjecture existential, and hence into Skolem constants.
2. **Negation normal form**. Conjectures are negated, the connectives `=>`, `<=>`, and `<~>` are expanded, negations are pushed to the atoms, and `$true`/`$false` are folded away.
3. **Skolemization**. Inside-out over the normal form: a universal quantifier binds a fresh context variable, an existential quantifier binds a Skolem function applied to the universal variables in scope.
   Skolem symbols are `skN`, skipping any `skN` already present in the problem.
4. **Distribution**. With quantifiers gone, `∨` is distributed over `∧`, and the conjuncts are read off as clauses.

The expansion of `<=>` under distribution is exponential in the nesting depth.
This is the textbook transformation the non-goals ask for; a definitional transformation would trade it for fresh predicates.
*/

use crate::{
    builder::{
        tptp::{AstAtom, AstFormula, AstTerm, Connective, Quantifier},
        NameEnv, SymbolKind,
    },
    context::Context,
    misc::log::targets,
    structures::{
        literal::{Literal, FALSE, TRUE},
        term::{Term, Variable},
    },
    types::err::ErrorKind,
};

/// A formula in negation normal form over source-level atoms.
#[derive(Debug)]
enum Nnf {
    True,
    False,
    Literal { polarity: bool, atom: AstAtom },
    And(Vec<Nnf>),
    Or(Vec<Nnf>),
    Forall(String, Box<Nnf>),
    Exists(String, Box<Nnf>),
}

/// A quantifier-free formula over context literals.
enum Matrix {
    Literal(Literal),
    And(Vec<Matrix>),
    Or(Vec<Matrix>),
}

impl Context {
    /// The clauses of `formula`, negated first when `negate` holds.
    pub(crate) fn clausify(
        &mut self,
        formula: &AstFormula,
        negate: bool,
    ) -> Result<Vec<Vec<Literal>>, ErrorKind> {
        let free = free_variables(formula);
        let closed = match free.is_empty() {
            true => formula.clone(),
            false => AstFormula::Quantified(Quantifier::Forall, free, Box::new(formula.clone())),
        };

        let normal = nnf(&closed, !negate);
        log::trace!(target: targets::CLAUSIFY, "Normal form: {normal:?}");

        match normal {
            Nnf::True => Ok(Vec::new()),
            Nnf::False => Ok(vec![Vec::new()]),
            tree => {
                let mut env = NameEnv::explicit();
                let mut scope = Vec::new();
                let matrix = self.skolemize(&tree, &mut env, &mut scope)?;
                Ok(distribute(&matrix))
            }
        }
    }

    /// Replaces quantifiers by context variables and Skolem terms, building the matrix.
    fn skolemize(
        &mut self,
        tree: &Nnf,
        env: &mut NameEnv,
        scope: &mut Vec<Variable>,
    ) -> Result<Matrix, ErrorKind> {
        match tree {
            Nnf::True | Nnf::False => panic!("! Constant under a simplified normal form"),

            Nnf::Literal { polarity, atom } => {
                Ok(Matrix::Literal(self.build_literal(*polarity, atom, env)?))
            }

            Nnf::And(children) => {
                let mut parts = Vec::with_capacity(children.len());
                for child in children {
                    parts.push(self.skolemize(child, env, scope)?);
                }
                Ok(Matrix::And(parts))
            }

            Nnf::Or(children) => {
                let mut parts = Vec::with_capacity(children.len());
                for child in children {
                    parts.push(self.skolemize(child, env, scope)?);
                }
                Ok(Matrix::Or(parts))
            }

            Nnf::Forall(name, body) => {
                let variable = self.counters.next_variable();
                let shadowed = env.bind(name, Term::Variable(variable));
                scope.push(variable);

                let matrix = self.skolemize(body, env, scope);

                scope.pop();
                env.restore(name, shadowed);
                matrix
            }

            Nnf::Exists(name, body) => {
                let symbol = self.fresh_skolem_symbol();
                self.signature.register(&symbol, SymbolKind::Function, scope.len())?;

                let witness = Term::Function(
                    symbol,
                    scope.iter().map(|variable| Term::Variable(*variable)).collect(),
                );
                let shadowed = env.bind(name, witness);

                let matrix = self.skolemize(body, env, scope);

                env.restore(name, shadowed);
                matrix
            }
        }
    }

    /// A Skolem symbol unused in the problem so far.
    fn fresh_skolem_symbol(&mut self) -> String {
        loop {
            self.counters.skolems += 1;
            let symbol = format!("sk{}", self.counters.skolems);
            if !self.signature.contains(&symbol) {
                return symbol;
            }
        }
    }
}

/// The negation normal form of `formula`, or of its negation when `polarity` is false.
fn nnf(formula: &AstFormula, polarity: bool) -> Nnf {
    match formula {
        AstFormula::Atom(atom) => match atom.predicate.as_str() {
            TRUE => constant(polarity),
            FALSE => constant(!polarity),
            _ => Nnf::Literal { polarity, atom: atom.clone() },
        },

        AstFormula::Negation(inner) => nnf(inner, !polarity),

        AstFormula::Binary(connective, left, right) => match connective {
            Connective::And => match polarity {
                true => conjoin(vec![nnf(left, true), nnf(right, true)]),
                false => disjoin(vec![nnf(left, false), nnf(right, false)]),
            },

            Connective::Or => match polarity {
                true => disjoin(vec![nnf(left, true), nnf(right, true)]),
                false => conjoin(vec![nnf(left, false), nnf(right, false)]),
            },

            Connective::Implies => match polarity {
                true => disjoin(vec![nnf(left, false), nnf(right, true)]),
                false => conjoin(vec![nnf(left, true), nnf(right, false)]),
            },

            Connective::Equivalent => match polarity {
                true => conjoin(vec![
                    disjoin(vec![nnf(left, false), nnf(right, true)]),
                    disjoin(vec![nnf(right, false), nnf(left, true)]),
                ]),
                false => conjoin(vec![
                    disjoin(vec![nnf(left, true), nnf(right, true)]),
                    disjoin(vec![nnf(left, false), nnf(right, false)]),
                ]),
            },

            Connective::NotEquivalent => {
                nnf(&AstFormula::Binary(Connective::Equivalent, left.clone(), right.clone()), !polarity)
            }
        },

        AstFormula::Quantified(quantifier, variables, body) => {
            let flipped = match (quantifier, polarity) {
                (Quantifier::Forall, true) | (Quantifier::Exists, false) => Quantifier::Forall,
                _ => Quantifier::Exists,
            };

            let mut tree = nnf(body, polarity);
            for variable in variables.iter().rev() {
                tree = match tree {
                    // A quantifier over a constant is the constant.
                    Nnf::True => Nnf::True,
                    Nnf::False => Nnf::False,
                    tree => match flipped {
                        Quantifier::Forall => Nnf::Forall(variable.clone(), Box::new(tree)),
                        Quantifier::Exists => Nnf::Exists(variable.clone(), Box::new(tree)),
                    },
                };
            }
            tree
        }
    }
}

fn constant(value: bool) -> Nnf {
    match value {
        true => Nnf::True,
        false => Nnf::False,
    }
}

/// The conjunction of `children`, flattened and folded over `$true`/`$false`.
fn conjoin(children: Vec<Nnf>) -> Nnf {
    let mut parts = Vec::new();
    for child in children {
        match child {
            Nnf::True => {}
            Nnf::False => return Nnf::False,
            Nnf::And(grandchildren) => parts.extend(grandchildren),
            child => parts.push(child),
        }
    }

    match parts.len() {
        0 => Nnf::True,
        1 => parts.pop().expect("length checked"),
        _ => Nnf::And(parts),
    }
}

/// The disjunction of `children`, flattened and folded over `$true`/`$false`.
fn disjoin(children: Vec<Nnf>) -> Nnf {
    let mut parts = Vec::new();
    for child in children {
        match child {
            Nnf::False => {}
            Nnf::True => return Nnf::True,
            Nnf::Or(grandchildren) => parts.extend(grandchildren),
            child => parts.push(child),
        }
    }

    match parts.len() {
        0 => Nnf::False,
        1 => parts.pop().expect("length checked"),
        _ => Nnf::Or(parts),
    }
}

/// The free variables of `formula`, in order of first occurrence.
fn free_variables(formula: &AstFormula) -> Vec<String> {
    let mut bound = Vec::new();
    let mut free = Vec::new();
    collect_free(formula, &mut bound, &mut free);
    free
}

fn collect_free(formula: &AstFormula, bound: &mut Vec<String>, free: &mut Vec<String>) {
    match formula {
        AstFormula::Atom(atom) => {
            for argument in &atom.arguments {
                collect_free_in_term(argument, bound, free);
            }
        }

        AstFormula::Negation(inner) => collect_free(inner, bound, free),

        AstFormula::Binary(_, left, right) => {
            collect_free(left, bound, free);
            collect_free(right, bound, free);
        }

        AstFormula::Quantified(_, variables, body) => {
            let depth = bound.len();
            bound.extend(variables.iter().cloned());
            collect_free(body, bound, free);
            bound.truncate(depth);
        }
    }
}

fn collect_free_in_term(term: &AstTerm, bound: &[String], free: &mut Vec<String>) {
    match term {
        AstTerm::Variable(name) => {
            if !bound.contains(name) && !free.contains(name) {
                free.push(name.clone());
            }
        }

        AstTerm::Function(_, args) => {
            for arg in args {
                collect_free_in_term(arg, bound, free);
            }
        }
    }
}

/// Distributes disjunction over conjunction, reading off the clauses.
fn distribute(matrix: &Matrix) -> Vec<Vec<Literal>> {
    match matrix {
        Matrix::Literal(literal) => vec![vec![literal.clone()]],

        Matrix::And(children) => children.iter().flat_map(distribute).collect(),

        Matrix::Or(children) => {
            let mut clauses: Vec<Vec<Literal>> = vec![Vec::new()];
            for child in children {
                let child_clauses = distribute(child);
                let mut crossed = Vec::with_capacity(clauses.len() * child_clauses.len());
                for clause in &clauses {
                    for addition in &child_clauses {
                        let mut merged = clause.clone();
                        merged.extend(addition.iter().cloned());
                        crossed.push(merged);
                    }
                }
                clauses = crossed;
            }
            clauses
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::tptp, config::Config};

    fn fof_clauses(text: &str, negate: bool) -> Vec<String> {
        let statements = tptp::parse(text).expect("parses");
        let tptp::Statement::Fof { formula, .. } = &statements[0] else {
            panic!("expected a fof statement");
        };

        let mut ctx = Context::from_config(Config { clausify: true, ..Config::default() });
        ctx.clausify(formula, negate)
            .expect("clausifies")
            .into_iter()
            .map(|literals| {
                literals.iter().map(|l| format!("{l}")).collect::<Vec<_>>().join("|")
            })
            .collect()
    }

    #[test]
    fn implications_expand() {
        let clauses = fof_clauses("fof(f, axiom, p => q).", false);
        assert_eq!(clauses, vec!["~p|q"]);
    }

    #[test]
    fn universals_become_variables() {
        let clauses = fof_clauses("fof(f, axiom, ![X]: p(X)).", false);
        assert_eq!(clauses, vec!["p(X0)"]);
    }

    #[test]
    fn existentials_become_skolem_terms() {
        let clauses = fof_clauses("fof(f, axiom, ![X]: ?[Y]: p(X, Y)).", false);
        assert_eq!(clauses, vec!["p(X0,sk1(X0))"]);
    }

    #[test]
    fn negated_conjectures_flip() {
        // ¬(∃X p(X) ∨ ¬p(a)) becomes ∀X ¬p(X) and p(a).
        let clauses = fof_clauses("fof(c, conjecture, ?[X]: p(X) | ~p(a)).", true);
        assert_eq!(clauses, vec!["~p(X0)", "p(a)"]);
    }

    #[test]
    fn free_variables_are_universal() {
        let clauses = fof_clauses("fof(f, axiom, p(X) => q(X)).", false);
        assert_eq!(clauses, vec!["~p(X0)|q(X0)"]);
    }

    #[test]
    fn free_variables_of_conjectures_skolemize() {
        let clauses = fof_clauses("fof(c, conjecture, p(X)).", true);
        assert_eq!(clauses, vec!["~p(sk1)"]);
    }

    #[test]
    fn equivalences_distribute() {
        let clauses = fof_clauses("fof(f, axiom, p <=> q).", false);
        assert_eq!(clauses, vec!["~p|q", "~q|p"]);
    }

    #[test]
    fn exclusive_or_is_the_negated_equivalence() {
        let clauses = fof_clauses("fof(f, axiom, p <~> q).", false);
        assert_eq!(clauses, vec!["p|q", "~p|~q"]);
    }

    #[test]
    fn constants_fold_away() {
        assert!(fof_clauses("fof(f, axiom, p | $true).", false).is_empty());
        assert_eq!(fof_clauses("fof(f, axiom, p & $true).", false), vec!["p"]);
        assert_eq!(fof_clauses("fof(f, axiom, $false).", false), vec![""]);
    }

    #[test]
    fn shadowed_variables_rebind() {
        let clauses = fof_clauses("fof(f, axiom, ![X]: (p(X) & ![X]: q(X))).", false);
        assert_eq!(clauses, vec!["p(X0)", "q(X1)"]);
    }

    #[test]
    fn distribution_crosses_conjunctions() {
        let clauses = fof_clauses("fof(f, axiom, (p & q) | r).", false);
        assert_eq!(clauses, vec!["p|r", "q|r"]);
    }
}
