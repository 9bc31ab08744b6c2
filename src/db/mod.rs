/*!
The databases of a context: the clause store and the derivation graph.
*/

pub mod clause;
pub mod proof;

/// A key to a clause held in the [clause database](clause::ClauseDB).
///
/// Keys are stable across removals, and a key whose clause has been removed safely yields nothing.
pub type ClauseKey = slotmap::DefaultKey;
