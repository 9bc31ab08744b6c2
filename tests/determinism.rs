use heron_fol::{
    config::{ClauseHeuristic, Config, LiteralSelection},
    context::Context,
    reports::Report,
};

const PROBLEM: &str = "
    cnf(a, axiom, p(X) | q(X)).
    cnf(b, axiom, ~p(f(Y))).
    cnf(c, axiom, q(Z) | r(Z)).
    cnf(d, negated_conjecture, ~q(f(W))).
";

fn run(config: Config) -> (Report, Vec<String>, usize, usize) {
    let mut ctx = Context::from_config(config);
    ctx.read_tptp(PROBLEM).expect("reads");
    let report = ctx.saturate().expect("saturates");
    (report, ctx.refutation_lines(), ctx.counters.iterations, ctx.counters.generated)
}

mod determinism {
    use super::*;

    #[test]
    fn identical_runs_are_identical() {
        let config = Config {
            forward_subsumption: true,
            backward_subsumption: true,
            heuristic: ClauseHeuristic::PickGiven(5),
            literal_selection: LiteralSelection::Smallest,
            ..Config::default()
        };

        let first = run(config.clone());
        let second = run(config);

        assert_eq!(first.0, Report::Refutation);
        assert_eq!(first, second);
        assert!(!first.1.is_empty());
    }

    #[test]
    fn identical_saturations_are_identical() {
        let satisfiable = "
            cnf(a, axiom, p(a)).
            cnf(b, axiom, ~p(X) | q(X)).
            cnf(c, negated_conjecture, ~q(b)).
        ";

        let outcomes: Vec<(Report, Vec<String>)> = (0..2)
            .map(|_| {
                let mut ctx = Context::from_config(Config::default());
                ctx.read_tptp(satisfiable).expect("reads");
                let report = ctx.saturate().expect("saturates");
                (report, ctx.saturation_lines())
            })
            .collect();

        assert_eq!(outcomes[0].0, Report::Saturation);
        assert_eq!(outcomes[0], outcomes[1]);
    }

    #[test]
    fn fresh_variable_numbering_restarts_per_context() {
        let lines: Vec<Option<String>> = (0..2)
            .map(|_| {
                let mut ctx = Context::from_config(Config::default());
                ctx.read_tptp(PROBLEM).expect("reads");
                ctx.derivations.line(0).map(str::to_string)
            })
            .collect();

        assert_eq!(lines[0], lines[1]);
        assert_eq!(lines[0].as_deref(), Some("cnf(c0,axiom,p(X0)|q(X0),input(a))."));
    }
}
