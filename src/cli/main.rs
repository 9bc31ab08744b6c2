/*!
A simple CLI interface to the library.

# Use

```sh
heron_cli [options] file.p
```

## Options

No option is required.
Though, of note:

- `-t` adds equality axioms when the problem uses equality.
- `-i` clausifies fof input; without it the input is assumed to be in clause normal form.
- `-f` and `-b` enable forward and backward subsumption, and combine as `-tfb`.
- `-H PickGiven5`, `-n smallest`, and `-S` choose the search strategy.

For full documentation of the supported options, see `--help`.

## Output

The result is reported as an SZS status line, with refutations bracketed by
`SZS output start CNFRefutation` and saturations by `SZS output start Saturation`.
*/

use clap::Parser;

use heron_fol::{
    config::{Args, Config},
    context::Context,
    reports::Report,
};

/// Entrypoint to the CLI.
fn main() {
    env_logger::init();

    let args = Args::parse();
    let cfg = Config::from_args(&args);

    let mut ctx: Context = Context::from_config(cfg);

    if let Err(e) = ctx.read_problem(&args.problem_file) {
        println!("% Error: {e}");
        std::process::exit(1);
    }

    let result = match ctx.saturate() {
        Ok(report) => report,

        Err(e) => {
            println!("% Saturation error: {e}");
            std::process::exit(2);
        }
    };

    println!("% SZS status {}", result.szs(ctx.problem_kind));

    match result {
        Report::Refutation => {
            println!("% SZS output start CNFRefutation.");
            for line in ctx.refutation_lines() {
                println!("{line}");
            }
            println!("% SZS output end CNFRefutation.");
        }

        Report::Saturation => {
            println!("% SZS output start Saturation.");
            for line in ctx.saturation_lines() {
                println!("{line}");
            }
            println!("% SZS output end Saturation.");
        }

        Report::GaveUp | Report::Unknown => {}
    }

    if args.stats {
        let counters = &ctx.counters;
        println!("% Iterations:          {}", counters.iterations);
        println!("% Clauses kept:        {}", counters.kept);
        println!("% Clauses generated:   {}", counters.generated);
        println!("% Tautologies:         {}", counters.tautologies);
        println!("% Forward subsumed:    {}", counters.forward_subsumed);
        println!("% Backward subsumed:   {}", counters.backward_subsumed);
        println!("% Processed clauses:   {}", ctx.clause_db.processed_count());
        println!("% Unprocessed clauses: {}", ctx.clause_db.unprocessed_count());
        println!("% Time:                {:.3?}", counters.time);
    }
}
