/*!
Configuration of a context, and the command-line surface which produces one.

The flags follow the conventions of resolution provers:
`-t` enables equality axioms, `-i` clausification of fof input, `-f` and `-b` the subsumption directions, `-S` the set of support, `-H` picks the clause-selection heuristic and `-n` the negative literal selection.
The combined form `-tfb` works as usual for the boolean flags.

Positive selection (`-p`) and negative selection (`-n`) are mutually exclusive, enforced at argument parsing.
*/

use clap::Parser;
use serde::Serialize;

/// Attempts to refute a TPTP problem by saturation under resolution
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The TPTP problem file to parse
    pub problem_file: std::path::PathBuf,

    /// Add equality axioms when the problem uses equality
    #[arg(short = 't', long = "equality-axioms", default_value_t = false)]
    pub equality_axioms: bool,

    /// Clausify fof input; without this flag the input is assumed to be in clause normal form
    #[arg(short = 'i', long = "clausify", default_value_t = false)]
    pub clausify: bool,

    /// Discard a new clause subsumed by a kept clause
    #[arg(short = 'f', long = "forward-subsumption", default_value_t = false)]
    pub forward_subsumption: bool,

    /// Discard kept clauses subsumed by a new clause
    #[arg(short = 'b', long = "backward-subsumption", default_value_t = false)]
    pub backward_subsumption: bool,

    /// Clause-selection heuristic: FIFO, SymbolCount, or PickGivenN
    #[arg(short = 'H', long = "heuristic", default_value = "PickGiven5")]
    pub heuristic: ClauseHeuristic,

    /// Negative literal selection strategy
    #[arg(short = 'n', long = "negative-selection", default_value_t, value_enum)]
    pub selection: LiteralSelection,

    /// Select the first positive literal instead of a negative literal
    #[arg(short = 'p', long = "positive-selection", default_value_t = false, conflicts_with = "selection")]
    pub positive_selection: bool,

    /// Restrict resolution to inferences with a parent in the set of support
    #[arg(short = 'S', long = "set-of-support", default_value_t = false)]
    pub set_of_support: bool,

    /// Soft wall-time budget for the saturation loop, in seconds
    #[arg(long = "time-limit")]
    pub time_limit: Option<u64>,

    /// Soft budget on the number of generated clauses
    #[arg(long = "clause-limit")]
    pub clause_limit: Option<usize>,

    /// Display counters on completion
    #[arg(long, default_value_t = false)]
    pub stats: bool,
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Add equality axioms when the problem uses equality.
    pub equality_axioms: bool,

    /// Accept fof statements and clausify them.
    pub clausify: bool,

    /// Discard a new clause subsumed by a kept clause.
    pub forward_subsumption: bool,

    /// Discard kept clauses properly subsumed by a new clause.
    pub backward_subsumption: bool,

    /// The clause-selection heuristic.
    pub heuristic: ClauseHeuristic,

    /// The negative literal selection strategy.
    pub literal_selection: LiteralSelection,

    /// Select the first positive literal instead.
    pub positive_selection: bool,

    /// Restrict resolution to inferences with a parent in the set of support.
    pub set_of_support: bool,

    /// Soft wall-time budget for the saturation loop.
    pub time_limit: Option<std::time::Duration>,

    /// Soft budget on the number of generated clauses.
    pub clause_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            equality_axioms: false,
            clausify: false,
            forward_subsumption: false,
            backward_subsumption: false,
            heuristic: ClauseHeuristic::PickGiven(5),
            literal_selection: LiteralSelection::None,
            positive_selection: false,
            set_of_support: false,
            time_limit: None,
            clause_limit: None,
        }
    }
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Config {
            equality_axioms: args.equality_axioms,
            clausify: args.clausify,
            forward_subsumption: args.forward_subsumption,
            backward_subsumption: args.backward_subsumption,
            heuristic: args.heuristic.clone(),
            literal_selection: args.selection,
            positive_selection: args.positive_selection,
            set_of_support: args.set_of_support,
            time_limit: args.time_limit.map(std::time::Duration::from_secs),
            clause_limit: args.clause_limit,
        }
    }
}

/// The negative literal selection strategies.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralSelection {
    /// Select no literal
    #[default]
    None,
    /// Select the first negative literal
    First,
    /// Select the negative literal of least weight
    Smallest,
    /// Select the negative literal of greatest weight
    Largest,
}

impl std::fmt::Display for LiteralSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::First => write!(f, "first"),
            Self::Smallest => write!(f, "smallest"),
            Self::Largest => write!(f, "largest"),
        }
    }
}

/// The clause-selection heuristics.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClauseHeuristic {
    /// Always the oldest unprocessed clause.
    Fifo,

    /// Always the lightest unprocessed clause by symbol count.
    SymbolCount,

    /// The oldest clause once every *n* picks, and the lightest otherwise.
    PickGiven(u32),
}

impl std::str::FromStr for ClauseHeuristic {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "FIFO" | "fifo" => Ok(Self::Fifo),
            "SymbolCount" | "symbol-count" => Ok(Self::SymbolCount),
            _ => match name.strip_prefix("PickGiven") {
                Some(ratio) => match ratio.parse::<u32>() {
                    Ok(ratio) if ratio > 0 => Ok(Self::PickGiven(ratio)),
                    _ => Err(format!("invalid PickGiven ratio in {name:?}")),
                },
                None => Err(format!(
                    "unknown heuristic {name:?}, expected FIFO, SymbolCount, or PickGivenN"
                )),
            },
        }
    }
}

impl std::fmt::Display for ClauseHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fifo => write!(f, "FIFO"),
            Self::SymbolCount => write!(f, "SymbolCount"),
            Self::PickGiven(ratio) => write!(f, "PickGiven{ratio}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_names_round_trip() {
        for name in ["FIFO", "SymbolCount", "PickGiven5"] {
            let heuristic: ClauseHeuristic = name.parse().expect("recognised");
            assert_eq!(format!("{heuristic}"), name);
        }
    }

    #[test]
    fn unknown_heuristics_are_rejected() {
        assert!("PickGiven0".parse::<ClauseHeuristic>().is_err());
        assert!("PickGivenX".parse::<ClauseHeuristic>().is_err());
        assert!("BestFirst".parse::<ClauseHeuristic>().is_err());
    }
}
