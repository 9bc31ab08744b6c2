use heron_fol::{config::Config, context::Context, reports::Report};

fn clausifying() -> Config {
    Config { clausify: true, ..Config::default() }
}

mod fof {
    use super::*;

    #[test]
    fn a_conjecture_is_a_theorem() {
        let mut ctx = Context::from_config(clausifying());
        assert!(ctx.read_tptp("fof(c, conjecture, ?[X]: p(X) | ~p(a)).").is_ok());
        assert!(ctx.saturate().is_ok());
        assert_eq!(ctx.report(), Report::Refutation);
        assert_eq!(ctx.report().szs(ctx.problem_kind), "Theorem");
    }

    #[test]
    fn an_unprovable_conjecture_is_counter_satisfiable() {
        let mut ctx = Context::from_config(clausifying());
        assert!(ctx.read_tptp("fof(c, conjecture, p(a) => p(b)).").is_ok());
        assert!(ctx.saturate().is_ok());
        assert_eq!(ctx.report(), Report::Saturation);
        assert_eq!(ctx.report().szs(ctx.problem_kind), "CounterSatisfiable");
    }

    #[test]
    fn axioms_combine_with_a_conjecture() {
        let mut ctx = Context::from_config(clausifying());
        let problem = "
            fof(all, axiom, ![X]: (p(X) => q(X))).
            fof(base, axiom, p(a)).
            fof(goal, conjecture, ?[Y]: q(Y)).
        ";
        assert!(ctx.read_tptp(problem).is_ok());
        assert!(ctx.saturate().is_ok());
        assert_eq!(ctx.report(), Report::Refutation);
        assert_eq!(ctx.report().szs(ctx.problem_kind), "Theorem");
    }

    #[test]
    fn quantifier_alternation_skolemizes() {
        // ∀X ∃Y r(X, Y) with ¬r(a, Y) anywhere is contradictory.
        let mut ctx = Context::from_config(clausifying());
        let problem = "
            fof(total, axiom, ![X]: ?[Y]: r(X, Y)).
            fof(none_for_a, axiom, ![Y]: ~r(a, Y)).
        ";
        assert!(ctx.read_tptp(problem).is_ok());
        assert!(ctx.saturate().is_ok());
        assert_eq!(ctx.report(), Report::Refutation);
    }

    #[test]
    fn cnf_and_fof_statements_mix() {
        let mut ctx = Context::from_config(clausifying());
        let problem = "
            cnf(base, axiom, p(a)).
            fof(goal, conjecture, ?[X]: p(X)).
        ";
        assert!(ctx.read_tptp(problem).is_ok());
        assert!(ctx.saturate().is_ok());
        assert_eq!(ctx.report(), Report::Refutation);

        // Any fof statement makes the problem a fof problem.
        assert_eq!(ctx.report().szs(ctx.problem_kind), "Theorem");
    }

    #[test]
    fn equivalences_clausify_soundly() {
        let mut ctx = Context::from_config(clausifying());
        let problem = "
            fof(iff, axiom, p(a) <=> q(a)).
            fof(left, axiom, p(a)).
            fof(goal, conjecture, q(a)).
        ";
        assert!(ctx.read_tptp(problem).is_ok());
        assert!(ctx.saturate().is_ok());
        assert_eq!(ctx.report(), Report::Refutation);
    }
}
