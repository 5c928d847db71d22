use fnplot::compile;

// Compilation and scanning log through the `log` facade; make sure a real
// logger at trace level does not change results.
#[test]
fn compile_and_scan_with_logger_installed() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();

    let f = compile("x == 0 ? 1 : sin(x) / x").unwrap();
    let ok = f
        .scan("[-1;1]".parse().unwrap(), 0.5)
        .unwrap()
        .filter(|s| s.y.is_ok())
        .count();
    assert_eq!(ok, 5);
    assert_eq!(f.eval(0.0), Ok(1.0));
}
