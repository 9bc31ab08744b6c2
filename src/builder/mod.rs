/*!
Building a clause set --- intake of parsed statements into a context.

The builder sits between the [parser](tptp) and the [clause database](crate::db::clause):

- Source-level variable names are replaced by fresh context [variables](crate::structures::Variable), so no two clauses of a context share a variable.
- Every function and predicate symbol is registered in the problem [Signature], and a symbol used with two arities, or as both function and predicate, is a fatal error before saturation starts.
- Literals equivalent to `$false` are dropped at intake, so an input clause of falsum literals arrives as the empty clause.
- Clauses of the negated conjecture are tagged for the set of support.

fof statements pass through the [clausifier](clausify), and are accepted only when clausification is enabled.
*/

pub mod clausify;
pub mod tptp;

use std::collections::{BTreeMap, HashMap};

use crate::{
    context::Context,
    db::ClauseKey,
    misc::log::targets,
    structures::{
        clause::{Clause, ClauseRole, ClauseSource},
        literal::{Literal, EQUALITY, FALSE, TRUE},
        term::Term,
    },
    types::err::{BuildError, ErrorKind, ParseError},
};

use self::tptp::{AstAtom, AstLiteral, AstTerm, Statement};

/// Whether a symbol names a function or a predicate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SymbolKind {
    Function,
    Predicate,
}

/// The signature of a problem: every symbol read, with its kind and arity.
///
/// The equality predicate and the propositional constants are handled apart from the symbol table, as no congruence axiom is generated for them.
#[derive(Debug, Default)]
pub struct Signature {
    symbols: BTreeMap<String, (SymbolKind, usize)>,
    equality: bool,
}

impl Signature {
    /// Registers a use of `symbol`, checking kind and arity against previous uses.
    pub fn register(&mut self, symbol: &str, kind: SymbolKind, arity: usize) -> Result<(), BuildError> {
        match self.symbols.get(symbol) {
            None => {
                self.symbols.insert(symbol.to_string(), (kind, arity));
                Ok(())
            }

            Some((seen_kind, seen_arity)) => {
                if *seen_kind != kind {
                    return Err(BuildError::KindMismatch { symbol: symbol.to_string() });
                }
                if *seen_arity != arity {
                    return Err(BuildError::ArityMismatch {
                        symbol: symbol.to_string(),
                        expected: *seen_arity,
                        found: arity,
                    });
                }
                Ok(())
            }
        }
    }

    /// Notes a use of the equality predicate.
    pub fn note_equality(&mut self) {
        self.equality = true;
    }

    /// Whether the equality predicate occurs in the problem.
    pub fn uses_equality(&self) -> bool {
        self.equality
    }

    /// Whether `symbol` has been registered.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains_key(symbol)
    }

    /// The function symbols of the signature, in name order.
    pub fn functions(&self) -> impl Iterator<Item = (&str, usize)> {
        self.symbols
            .iter()
            .filter(|(_, (kind, _))| *kind == SymbolKind::Function)
            .map(|(symbol, (_, arity))| (symbol.as_str(), *arity))
    }

    /// The predicate symbols of the signature, in name order.
    pub fn predicates(&self) -> impl Iterator<Item = (&str, usize)> {
        self.symbols
            .iter()
            .filter(|(_, (kind, _))| *kind == SymbolKind::Predicate)
            .map(|(symbol, (_, arity))| (symbol.as_str(), *arity))
    }
}

/// A mapping from source-level variable names to context terms, scoped to one statement.
pub(crate) struct NameEnv {
    map: HashMap<String, Term>,

    /// Whether an unmapped name binds a fresh variable, as in a cnf clause.
    implicit: bool,
}

impl NameEnv {
    pub(crate) fn implicit() -> Self {
        NameEnv { map: HashMap::new(), implicit: true }
    }

    pub(crate) fn explicit() -> Self {
        NameEnv { map: HashMap::new(), implicit: false }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Term> {
        self.map.get(name)
    }

    /// Binds `name`, returning any shadowed binding for later [restore](Self::restore).
    pub(crate) fn bind(&mut self, name: &str, term: Term) -> Option<Term> {
        self.map.insert(name.to_string(), term)
    }

    /// Restores the binding shadowed when `name` was bound.
    pub(crate) fn restore(&mut self, name: &str, shadowed: Option<Term>) {
        match shadowed {
            Some(term) => {
                self.map.insert(name.to_string(), term);
            }
            None => {
                self.map.remove(name);
            }
        }
    }
}

impl Context {
    /// Reads a TPTP problem file, following includes relative to the including file.
    pub fn read_problem(&mut self, path: &std::path::Path) -> Result<(), ErrorKind> {
        let mut include_stack = Vec::new();
        self.read_file(path, &mut include_stack)
    }

    /// Reads TPTP statements from a string.
    ///
    /// Included paths are resolved as given, relative to the working directory.
    ///
    /// ```rust
    /// # use heron_fol::{config::Config, context::Context};
    /// let mut ctx = Context::from_config(Config::default());
    /// assert!(ctx.read_tptp("cnf(a, axiom, p(X)).").is_ok());
    /// assert!(ctx.read_tptp("cnf(a, axiom, p(X, Y)).").is_err());
    /// ```
    pub fn read_tptp(&mut self, text: &str) -> Result<(), ErrorKind> {
        let statements = tptp::parse(text)?;
        let mut include_stack = Vec::new();
        self.read_statements(statements, None, &mut include_stack)
    }

    fn read_file(
        &mut self,
        path: &std::path::Path,
        include_stack: &mut Vec<std::path::PathBuf>,
    ) -> Result<(), ErrorKind> {
        if include_stack.iter().any(|seen| seen == path) {
            return Err(ParseError::IncludeCycle(path.display().to_string()).into());
        }

        let text = std::fs::read_to_string(path)
            .map_err(|_| ParseError::NoFile(path.display().to_string()))?;
        let statements = tptp::parse(&text)?;
        log::info!(target: targets::PARSER,
            "Read {} statements from {}", statements.len(), path.display());

        include_stack.push(path.to_path_buf());
        let result = self.read_statements(statements, path.parent(), include_stack);
        include_stack.pop();
        result
    }

    fn read_statements(
        &mut self,
        statements: Vec<Statement>,
        base: Option<&std::path::Path>,
        include_stack: &mut Vec<std::path::PathBuf>,
    ) -> Result<(), ErrorKind> {
        for statement in statements {
            match statement {
                Statement::Cnf { name, role, position, literals } => {
                    let role = Self::recognise_role(&role, position)?;
                    self.add_input_clause(&name, role, &literals)?;
                }

                Statement::Fof { name, role, position, formula } => {
                    let recognised = Self::recognise_role(&role, position)?;
                    let negate = role == "conjecture";
                    self.add_formula(&name, recognised, negate, &formula)?;
                }

                Statement::Include { path } => {
                    let resolved = match base {
                        Some(base) => base.join(&path),
                        None => std::path::PathBuf::from(&path),
                    };
                    self.read_file(&resolved, include_stack)?;
                }
            }
        }
        Ok(())
    }

    fn recognise_role(role: &str, position: (usize, usize)) -> Result<ClauseRole, ErrorKind> {
        ClauseRole::from_tptp(role).ok_or_else(|| {
            ParseError::UnsupportedRole {
                line: position.0,
                column: position.1,
                role: role.to_string(),
            }
            .into()
        })
    }

    /// Adds a cnf input clause, renaming its variables apart and dropping falsum literals.
    pub fn add_input_clause(
        &mut self,
        name: &str,
        role: ClauseRole,
        literals: &[AstLiteral],
    ) -> Result<ClauseKey, ErrorKind> {
        let mut env = NameEnv::implicit();
        let mut built = Vec::with_capacity(literals.len());

        for literal in literals {
            let literal = self.build_literal(literal.polarity, &literal.atom, &mut env)?;
            if literal.is_falsum() {
                continue;
            }
            built.push(literal);
        }

        let clause = Clause::new(built, role, ClauseSource::Input { name: name.to_string() });
        let sos = role == ClauseRole::NegatedConjecture;
        Ok(self.record_clause(clause, sos))
    }

    /// Adds a fof formula through the clausifier.
    ///
    /// `negate` holds for conjectures, whose clauses descend from the negation.
    pub fn add_formula(
        &mut self,
        name: &str,
        role: ClauseRole,
        negate: bool,
        formula: &tptp::AstFormula,
    ) -> Result<(), ErrorKind> {
        if !self.config.clausify {
            return Err(BuildError::FofWithoutClausification.into());
        }

        self.problem_kind = crate::reports::ProblemKind::Fof;

        let sos = role == ClauseRole::NegatedConjecture;
        let matrices = self.clausify(formula, negate)?;
        let clause_count = matrices.len();

        for literals in matrices {
            let clause = Clause::new(literals, role, ClauseSource::Input { name: name.to_string() });
            self.record_clause(clause, sos);
        }

        log::info!(target: targets::CLAUSIFY, "Clausified {name} into {clause_count} clauses");
        Ok(())
    }

    /// Builds a context literal from a source atom, registering its symbols.
    pub(crate) fn build_literal(
        &mut self,
        polarity: bool,
        atom: &AstAtom,
        env: &mut NameEnv,
    ) -> Result<Literal, ErrorKind> {
        match atom.predicate.as_str() {
            EQUALITY => {
                self.signature.note_equality();
            }

            TRUE | FALSE => {}

            predicate => {
                self.signature
                    .register(predicate, SymbolKind::Predicate, atom.arguments.len())?;
            }
        }

        let mut arguments = Vec::with_capacity(atom.arguments.len());
        for argument in &atom.arguments {
            arguments.push(self.build_term(argument, env)?);
        }

        Ok(Literal::new(polarity, &atom.predicate, arguments))
    }

    /// Builds a context term from a source term, registering its function symbols.
    pub(crate) fn build_term(&mut self, term: &AstTerm, env: &mut NameEnv) -> Result<Term, ErrorKind> {
        match term {
            AstTerm::Variable(name) => match env.get(name) {
                Some(bound) => Ok(bound.clone()),

                None => match env.implicit {
                    true => {
                        let fresh = Term::Variable(self.counters.next_variable());
                        env.bind(name, fresh.clone());
                        Ok(fresh)
                    }
                    false => panic!("! Unbound variable {name} after quantifier handling"),
                },
            },

            AstTerm::Function(symbol, args) => {
                self.signature.register(symbol, SymbolKind::Function, args.len())?;
                let mut arguments = Vec::with_capacity(args.len());
                for arg in args {
                    arguments.push(self.build_term(arg, env)?);
                }
                Ok(Term::Function(symbol.clone(), arguments))
            }
        }
    }
}
