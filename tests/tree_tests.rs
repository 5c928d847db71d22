use fnplot::{Ast, BinOp, UnaryOp, collect_vars, compile, evaluate, parse};

#[test]
fn reparsing_yields_equal_trees() {
    for src in [
        "3 + 4 * 2",
        "-x^2 + sin(x)/2",
        "x <= 0 ? 0 : log(x)",
        "sqrt(abs(x - pi)) != 1",
    ] {
        assert_eq!(parse(src).unwrap(), parse(src).unwrap(), "{src}");
    }
}

#[test]
fn constant_expressions_are_deterministic() {
    for src in ["sin(1) * 3 - 2^0.5", "(-8)^(1/3)", "acos(2)"] {
        let a = compile(src).unwrap().eval(0.0).unwrap();
        let b = compile(src).unwrap().eval(0.0).unwrap();
        assert!(a == b || (a.is_nan() && b.is_nan()), "{src}");
    }
}

#[test]
fn display_is_fully_parenthesised() {
    assert_eq!(parse("3 + 4 * 2").unwrap().to_string(), "(3 + (4 * 2))");
    assert_eq!(parse("-x^2").unwrap().to_string(), "((-x) ^ 2)");
    assert_eq!(
        parse("x < 1 ? sin(x) : 2").unwrap().to_string(),
        "(x < 1) ? sin(x) : 2"
    );
}

#[test]
fn display_output_parses_back_to_the_same_tree() {
    for src in [
        "3 + 4 * 2 - 1",
        "-3^2",
        "2 ^ 3 ^ 2",
        "x >= 0 ? sqrt(x) : -sqrt(-x)",
        "pi * x / 180",
        "--x + +x",
    ] {
        let tree = parse(src).unwrap();
        let again = parse(&tree.to_string()).unwrap();
        assert_eq!(tree, again, "{src} -> {tree}");
    }
}

#[test]
fn folded_constants_render_explicitly() {
    assert_eq!(Ast::Num(-3.0).to_string(), "(-3)");
    assert_eq!(Ast::Num(-0.0).to_string(), "(-0)");
    assert_eq!(Ast::Num(f64::NEG_INFINITY).to_string(), "(-inf)");
    assert_eq!(Ast::Num(f64::INFINITY).to_string(), "inf");
    assert_eq!(Ast::Num(f64::NAN).to_string(), "NaN");
    // a negative literal reads back as a negation of its magnitude
    assert_eq!(
        parse(&Ast::Num(-3.0).to_string()).unwrap(),
        Ast::Unary(UnaryOp::Minus, Box::new(Ast::Num(3.0)))
    );
}

#[test]
fn hand_built_tree_evaluates() {
    let tree = Ast::Binary(
        BinOp::Mul,
        Box::new(Ast::Unary(UnaryOp::Minus, Box::new(Ast::Var("x".into())))),
        Box::new(Ast::Num(2.0)),
    );
    assert_eq!(evaluate(&tree, &("x", 4.0)), Ok(-8.0));
    assert_eq!(tree.size(), 4);
}

#[test]
fn collects_the_single_free_variable() {
    assert_eq!(collect_vars(&parse("x * sin(x) + x").unwrap()), vec!["x"]);
    assert!(collect_vars(&parse("2 * pi").unwrap()).is_empty());
}

#[test]
fn e_is_a_constant_not_a_variable() {
    let f = compile("e * x").unwrap();
    assert_eq!(f.variable(), Some("x"));
    assert_eq!(f.eval(1.0).unwrap(), std::f64::consts::E);
}

#[test]
fn compiled_expr_from_str() {
    let f: fnplot::CompiledExpr = "x + 1".parse().unwrap();
    assert_eq!(f.source(), "x + 1");
    assert_eq!(f.eval(1.0), Ok(2.0));
}
