/*!
The roles clauses carry and the sources from which clauses are derived.
*/

/// The TPTP role a clause carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseRole {
    /// An axiom, or any input role without dedicated handling.
    Axiom,

    /// A hypothesis of the problem.
    Hypothesis,

    /// A clause of the negated conjecture, or a descendant role of one.
    NegatedConjecture,

    /// A derived clause.
    Plain,
}

impl ClauseRole {
    /// The role for an input statement with the given TPTP role name, if the role is recognised.
    pub fn from_tptp(role: &str) -> Option<Self> {
        match role {
            "axiom" | "definition" | "assumption" | "lemma" | "theorem" | "corollary" | "plain" => {
                Some(Self::Axiom)
            }
            "hypothesis" => Some(Self::Hypothesis),
            "conjecture" | "negated_conjecture" => Some(Self::NegatedConjecture),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClauseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Axiom => write!(f, "axiom"),
            Self::Hypothesis => write!(f, "hypothesis"),
            Self::NegatedConjecture => write!(f, "negated_conjecture"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// The source of a clause.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClauseSource {
    /// An input clause, by the name of its TPTP statement.
    Input { name: String },

    /// A synthesized equality axiom.
    EqualityAxiom,

    /// A binary resolvent, noting parent identifiers and the resolved literal position within each parent.
    Resolution {
        left: usize,
        left_literal: usize,
        right: usize,
        right_literal: usize,
    },

    /// A factor, noting the parent identifier and the positions of the kept and merged literals.
    Factoring {
        parent: usize,
        kept: usize,
        merged: usize,
    },
}

impl ClauseSource {
    /// The identifiers of the parent clauses, oldest first.
    pub fn parents(&self) -> Vec<usize> {
        match self {
            Self::Input { .. } | Self::EqualityAxiom => Vec::new(),
            Self::Resolution { left, right, .. } => vec![*left, *right],
            Self::Factoring { parent, .. } => vec![*parent],
        }
    }
}

/// The TPTP-style source annotation, e.g. `inference(resolution,[],[c1,c2])`.
impl std::fmt::Display for ClauseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input { name } => write!(f, "input({name})"),

            Self::EqualityAxiom => write!(f, "eq_axiom"),

            Self::Resolution { left, right, .. } => {
                write!(f, "inference(resolution,[],[c{left},c{right}])")
            }

            Self::Factoring { parent, .. } => {
                write!(f, "inference(factoring,[],[c{parent}])")
            }
        }
    }
}
