use fasteval::{Compiler, Evaler, Parser, Slab, eval_compiled_ref};
use rand::Rng;
use std::collections::HashMap;

const EPS: f64 = 1e-9;

fn eval_with_fasteval(expr: &str, x: f64) -> Result<f64, fasteval::Error> {
    let mut slab = Slab::new();
    let parser = Parser::new();
    let compiled = parser
        .parse(expr, &mut slab.ps)?
        .from(&slab.ps)
        .compile(&slab.ps, &mut slab.cs);

    let mut vars: HashMap<String, f64> = HashMap::new();
    vars.insert("x".to_string(), x);
    let mut ns = |name: &str, args: Vec<f64>| -> Option<f64> {
        if !args.is_empty() {
            return Some(f64::NAN);
        }
        vars.get(name).copied()
    };

    Ok(eval_compiled_ref!(&compiled, &slab, &mut ns))
}

#[test]
fn fnplot_matches_fasteval_on_random_inputs() {
    // Arithmetic and comparisons only: both grammars agree there (single '^' per expression).
    let expressions = vec![
        "x + 1",
        "x * x - 3 * x + 2",
        "(x + 1) * (x - 1) / 4",
        "x / 0.1 + 10",
        "x ^ 2",
        "2 ^ x",
        "x < 3",
        "x <= 3",
        "x > 3",
        "x >= 3",
        "x * 2 - (x + 4) / 3",
    ];

    let compiled: Vec<_> = expressions
        .iter()
        .map(|e| (e.to_string(), fnplot::compile(e).unwrap()))
        .collect();

    let trials = 200usize;
    let mut rng = rand::thread_rng();

    for (expr, f) in compiled {
        for _ in 0..trials {
            let x: f64 = rng.gen_range(-10.0..10.0);
            let fe_out = eval_with_fasteval(&expr, x).unwrap();
            let ours = f.eval(x).unwrap();
            if fe_out.is_nan() && ours.is_nan() {
                continue;
            }
            let diff = (fe_out - ours).abs();
            assert!(
                diff <= EPS * fe_out.abs().max(1.0),
                "expr='{}' fasteval={} fnplot={} diff={} x={}",
                expr,
                fe_out,
                ours,
                diff,
                x
            );
        }
    }
}
