// tests/grammar_properties.rs
use fractal_turtle::{FractalConfig, GrammarEngine, LSystemError, Preset, expand};

fn engine() -> GrammarEngine {
    GrammarEngine::default()
}

#[test]
fn test_zero_iterations_returns_axiom() {
    for preset in Preset::ALL {
        let config = preset.config().with_iterations(0);
        assert_eq!(expand(&config).unwrap().as_str(), config.axiom);
    }
}

#[test]
fn test_generations_compose() {
    for preset in Preset::ALL {
        let config = preset.config();
        for k in 0..3 {
            let at_k = engine().expand_n(&config, k).unwrap();
            let next = engine().expand_n(&config, k + 1).unwrap();
            let stepped = engine().rewrite_once(&config, at_k.as_str()).unwrap();
            assert_eq!(next.as_str(), stepped, "{} at generation {}", config.name, k + 1);
        }
    }
}

#[test]
fn test_generations_iterator_matches_expand() {
    let config = Preset::HilbertCurve.config();
    for (k, generation) in engine().generations(&config).take(4).enumerate() {
        assert_eq!(generation.unwrap(), engine().expand_n(&config, k as u32).unwrap());
    }
}

#[test]
fn test_seed_symbol_vanishes() {
    // `S` seeds `A` once and never reappears.
    let config = FractalConfig::new("seed", "SA", "F", "SSA")
        .with_rule('S', "")
        .with_rule('A', "AF");
    let generations: Vec<_> = engine()
        .generations(&config)
        .take(5)
        .map(|g| g.unwrap())
        .collect();
    assert_eq!(generations[0].count('S'), 2);
    for generation in &generations[1..] {
        assert_eq!(generation.count('S'), 0);
    }
    assert_eq!(generations[1].as_str(), "AF");
}

#[test]
fn test_frec_fractal_draws_only_newest_generation() {
    let config = Preset::FrecFractal.config();
    let previous = engine().expand_n(&config, 1).unwrap();
    let current = engine().expand_n(&config, 2).unwrap();
    // Every `X`/`Y` contributes five `F`; the older `F` are deleted.
    let seeds = previous.count('X') + previous.count('Y');
    assert_eq!(current.count('F'), 5 * seeds);
    assert_eq!(current.count('F'), 700);
}

#[test]
fn test_fractal_tree_single_generation() {
    let config = FractalConfig::new("tree", "X", "F+-[]", "X")
        .with_rule('X', "F+[[X]-X]-F[-FX]+X")
        .with_iterations(1);
    assert_eq!(expand(&config).unwrap().as_str(), "F+[[X]-X]-F[-FX]+X");
}

#[test]
fn test_dragon_curve_golden() {
    let config = Preset::DragonCurve.config().with_iterations(2);
    assert_eq!(expand(&config).unwrap().as_str(), "FX+YF++-FX-YF+");

    let deep = engine().expand_n(&config, 10).unwrap();
    assert_eq!(deep.len(), 4094);
    assert_eq!(deep.count('F'), 1024);
}

#[test]
fn test_expansion_cap_is_recoverable() {
    let config = Preset::FractalTree.config();
    let small = GrammarEngine::new(10_000);
    assert!(matches!(
        small.expand_n(&config, 7),
        Err(LSystemError::ResourceLimitExceeded { .. })
    ));
    // The same engine keeps working for smaller requests.
    assert!(small.expand_n(&config, 3).is_ok());
}
