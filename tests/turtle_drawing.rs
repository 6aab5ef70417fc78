// tests/turtle_drawing.rs
use fractal_turtle::{
    DrawCommand, Drawing, GrammarEngine, LSystemError, Preset, RenderRequest, SvgCanvas,
    TurtleConfig, TurtleInterpreter, render,
};
use glam::DVec2;

fn interpreter(step_length: f64, degrees: f64) -> TurtleInterpreter {
    TurtleInterpreter::new(TurtleConfig {
        step_length,
        angle: degrees.to_radians(),
        origin: DVec2::ZERO,
        initial_heading: 0.0,
        ..Default::default()
    })
}

#[test]
fn test_right_angle_walk() {
    let l = 2.5;
    let mut drawing = Drawing::new();
    let summary = interpreter(l, 90.0)
        .interpret(&"F+F-F".into(), &mut drawing)
        .unwrap();

    let ends: Vec<DVec2> = drawing.segments().iter().map(|s| s.to).collect();
    let expected = [DVec2::new(l, 0.0), DVec2::new(l, -l), DVec2::new(2.0 * l, -l)];
    assert_eq!(ends.len(), 3);
    for (end, want) in ends.iter().zip(expected) {
        assert!(end.abs_diff_eq(want, 1e-9), "{end} != {want}");
    }
    assert_eq!(summary.segments, 3);
    assert!(summary.final_state.heading.abs() < 1e-12);
}

#[test]
fn test_pop_before_push_is_malformed() {
    let mut drawing = Drawing::new();
    let result = interpreter(1.0, 90.0).interpret(&"]F".into(), &mut drawing);
    assert!(matches!(
        result,
        Err(LSystemError::MalformedSequence { index: 0 })
    ));
    assert_eq!(drawing.commands(), &[DrawCommand::MoveTo(DVec2::ZERO)]);
}

#[test]
fn test_unbalanced_tail_draws_up_to_failure() {
    let mut drawing = Drawing::new();
    let result = interpreter(1.0, 90.0).interpret(&"F[F]]F".into(), &mut drawing);
    assert!(matches!(
        result,
        Err(LSystemError::MalformedSequence { index: 4 })
    ));
    assert_eq!(drawing.segments().len(), 2);
}

#[test]
fn test_undefined_symbols_are_no_ops() {
    let mut drawing = Drawing::new();
    let summary = interpreter(1.0, 90.0)
        .interpret(&"XFYZ?F".into(), &mut drawing)
        .unwrap();
    assert_eq!(summary.segments, 2);
    assert!(
        summary
            .final_state
            .position
            .abs_diff_eq(DVec2::new(2.0, 0.0), 1e-9)
    );
}

#[test]
fn test_presets_leave_branch_stack_empty() {
    let engine = GrammarEngine::default();
    for preset in Preset::ALL {
        let config = preset.config();
        let sequence = engine.expand(&config).unwrap();
        assert!(sequence.is_balanced(), "{}", config.name);
        assert_eq!(sequence.count('['), sequence.count(']'));

        let mut drawing = Drawing::with_size(800.0, 800.0);
        let summary = render(&RenderRequest::new(config.clone()), &engine, &mut drawing)
            .unwrap_or_else(|e| panic!("{}: {e}", config.name));
        assert!(summary.segments > 0, "{}", config.name);
        assert!(!summary.cancelled);
    }
}

#[test]
fn test_branching_tree_returns_to_trunk() {
    let config = Preset::BendTree.config();
    let sequence = GrammarEngine::default().expand_n(&config, 1).unwrap();
    let turtle = TurtleInterpreter::new(TurtleConfig::from_fractal(&config, 1, DVec2::ZERO));
    let mut drawing = Drawing::new();
    let summary = turtle.interpret(&sequence, &mut drawing).unwrap();

    // `FF-[...]+[...]`: both branches pop back to the top of the trunk.
    let trunk_top = DVec2::new(0.0, -60.0);
    assert_eq!(summary.max_depth, 1);
    assert!(summary.final_state.position.abs_diff_eq(trunk_top, 1e-9));
    assert!((summary.final_state.heading - config.initial_heading.to_radians()).abs() < 1e-12);
}

#[test]
fn test_svg_render() {
    let request = RenderRequest::new(Preset::KochSnowflake.config()).with_iterations(Some(2));
    let mut canvas = SvgCanvas::new(400.0, 400.0).with_stroke_width(2.0);
    let summary = render(&request, &GrammarEngine::default(), &mut canvas).unwrap();
    assert_eq!(summary.segments, 48);

    let text = canvas.to_svg_string();
    assert!(text.contains("<svg"));
    assert!(text.contains("stroke-width=\"2\""));
    assert!(canvas.path_count() > 1);
}
