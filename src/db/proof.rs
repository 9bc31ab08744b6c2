/*!
The derivation graph --- every recorded clause and the parent relation between them.

The graph is append-only.
A clause removed from the [clause database](crate::db::clause) by backward subsumption may still be an ancestor of the empty clause, so derivation records outlive the clauses they describe.

Each node holds the rendered TPTP line of its clause, fixed at recording time.
Edges run from parent to child, and the ancestors of a refutation are collected by a depth-first search over the reversed graph.
Identifiers increase with creation, so sorting the collected ancestors by identifier restores a topological order of the derivation.
*/

use std::collections::HashMap;

use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::{Dfs, Reversed},
};

use crate::structures::clause::Clause;

/// A recorded clause: its identifier and rendered TPTP line.
#[derive(Clone, Debug)]
pub struct ClauseRecord {
    /// The identifier of the recorded clause.
    pub id: usize,

    /// The rendered line, e.g. `cnf(c4,plain,q(a),inference(resolution,[],[c0,c2])).`
    pub line: String,
}

/// The parent relation over every clause recorded in a context.
#[derive(Debug, Default)]
pub struct DerivationGraph {
    graph: DiGraph<ClauseRecord, ()>,
    indices: HashMap<usize, NodeIndex>,
}

impl DerivationGraph {
    /// Records `clause` and its parent edges.
    pub fn record(&mut self, clause: &Clause) {
        let record = ClauseRecord {
            id: clause.id,
            line: format!("cnf(c{},{},{},{}).", clause.id, clause.role, clause, clause.source),
        };

        let node = self.graph.add_node(record);
        self.indices.insert(clause.id, node);

        for parent in clause.source.parents() {
            if let Some(parent_node) = self.indices.get(&parent) {
                self.graph.add_edge(*parent_node, node, ());
            }
        }
    }

    /// The rendered line of the clause with identifier `id`, if recorded.
    pub fn line(&self, id: usize) -> Option<&str> {
        self.indices
            .get(&id)
            .map(|node| self.graph[*node].line.as_str())
    }

    /// The rendered lines of every ancestor of the clause with identifier `id`, itself included, in derivation order.
    pub fn ancestor_lines(&self, id: usize) -> Vec<String> {
        let Some(start) = self.indices.get(&id) else {
            return Vec::new();
        };

        let reversed = Reversed(&self.graph);
        let mut ancestors = Vec::new();

        let mut dfs = Dfs::new(reversed, *start);
        while let Some(node) = dfs.next(reversed) {
            ancestors.push(&self.graph[node]);
        }

        ancestors.sort_by_key(|record| record.id);
        ancestors.into_iter().map(|record| record.line.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{
        clause::{ClauseRole, ClauseSource},
        literal::Literal,
        term::Term,
    };

    fn input(id: usize, name: &str) -> Clause {
        let mut clause = Clause::new(
            vec![Literal::new(true, "p", vec![Term::constant("a")])],
            ClauseRole::Axiom,
            ClauseSource::Input { name: name.to_string() },
        );
        clause.id = id;
        clause
    }

    #[test]
    fn ancestors_are_closed_and_ordered() {
        let mut graph = DerivationGraph::default();

        graph.record(&input(0, "a"));
        graph.record(&input(1, "b"));
        graph.record(&input(2, "c"));

        let mut resolvent = Clause::new(
            Vec::new(),
            ClauseRole::Plain,
            ClauseSource::Resolution { left: 0, left_literal: 0, right: 1, right_literal: 0 },
        );
        resolvent.id = 3;
        graph.record(&resolvent);

        let lines = graph.ancestor_lines(3);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("cnf(c0,"));
        assert!(lines[1].starts_with("cnf(c1,"));
        assert!(lines[2].starts_with("cnf(c3,plain,$false,"));

        // The unrelated input c2 is not an ancestor.
        assert!(!lines.iter().any(|line| line.starts_with("cnf(c2,")));
    }

    #[test]
    fn lines_survive_clause_removal() {
        let mut graph = DerivationGraph::default();
        graph.record(&input(0, "a"));

        assert_eq!(graph.line(0), Some("cnf(c0,axiom,p(a),input(a))."));
        assert_eq!(graph.line(1), None);
    }
}
