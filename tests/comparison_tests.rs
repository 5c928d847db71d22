use fnplot::compile;

fn eval(src: &str, x: f64) -> f64 {
    compile(src).unwrap().eval(x).unwrap()
}

#[test]
fn equality_within_epsilon() {
    assert_eq!(eval("x == 1", 1.0 + 5e-11), 1.0);
    assert_eq!(eval("x != 1", 1.0 + 5e-11), 0.0);
}

#[test]
fn equality_outside_epsilon() {
    assert_eq!(eval("x == 1", 1.0 + 1e-9), 0.0);
    assert_eq!(eval("x != 1", 1.0 + 1e-9), 1.0);
}

#[test]
fn transcendental_noise_is_absorbed() {
    // sin(pi) is ~1.2e-16, not 0
    assert_eq!(eval("sin(pi) == 0", 0.0), 1.0);
}

#[test]
fn ordering_comparisons_are_exact() {
    assert_eq!(eval("x < 1", 1.0 - 1e-12), 1.0);
    assert_eq!(eval("x > 1", 1.0 + 1e-12), 1.0);
    assert_eq!(eval("x <= 1", 1.0), 1.0);
    assert_eq!(eval("x >= 1", 1.0), 1.0);
    assert_eq!(eval("x <= 1", 1.0 + 1e-12), 0.0);
    assert_eq!(eval("x >= 1", 1.0 - 1e-12), 0.0);
}

#[test]
fn nan_compares_unequal() {
    assert_eq!(eval("x^0.5 == x^0.5", -1.0), 0.0);
    assert_eq!(eval("x^0.5 != x^0.5", -1.0), 1.0);
}
