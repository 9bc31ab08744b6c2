/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [saturation loop](crate::procedures::saturate)
    pub const SATURATE: &str = "saturate";

    /// Logs related to [resolution and factoring](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [subsumption](crate::procedures::subsumption)
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to [literal selection](crate::procedures::selection)
    pub const SELECTION: &str = "selection";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [parsing](crate::builder::tptp)
    pub const PARSER: &str = "parser";

    /// Logs related to the [clausifier](crate::builder::clausify)
    pub const CLAUSIFY: &str = "clausify";

    /// Logs related to [equality axioms](crate::procedures::equality)
    pub const EQUALITY: &str = "equality";
}
