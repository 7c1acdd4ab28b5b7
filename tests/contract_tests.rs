use oscillo::{Boundary, Oscillator, OscillatorConfig, Solver, SolverKind};

const FRAME: f64 = 1.0 / 60.0;

fn build(kind: SolverKind, config: OscillatorConfig<f64>, boundary: Boundary<f64>) -> Solver<f64> {
    Solver::new(kind, config, boundary)
}

#[test]
fn critically_damped_converges_for_every_solver() {
    for kind in SolverKind::ALL {
        let mut spring = build(kind, OscillatorConfig::new(), Boundary::new(10.0, 0.0));
        for _ in 0..120 {
            spring.evaluate(FRAME);
        }
        assert!(spring.value().abs() < 0.01, "{kind} ended at {}", spring.value());
    }
}

#[test]
fn critically_damped_converges_in_f32() {
    for kind in SolverKind::ALL {
        let mut spring: Solver<f32> = Solver::new(kind, OscillatorConfig::new(), Boundary::new(10.0, 0.0));
        for _ in 0..120 {
            spring.evaluate(1.0 / 60.0);
        }
        assert!(spring.value().abs() < 0.01, "{kind} ended at {}", spring.value());
    }
}

#[test]
fn evaluate_zero_after_reset_returns_start() {
    for kind in SolverKind::ALL {
        let mut spring = build(kind, OscillatorConfig::new(), Boundary::new(3.5, -2.0));
        for _ in 0..10 {
            spring.evaluate(FRAME);
        }
        spring.reset();
        assert_eq!(spring.evaluate(0.0), 3.5, "{kind}");
    }
}

#[test]
fn retarget_does_not_snap() {
    for kind in SolverKind::ALL {
        let mut spring = build(kind, OscillatorConfig::new(), Boundary::new(10.0, 0.0));
        for _ in 0..10 {
            spring.evaluate(FRAME);
        }
        let before = spring.value();
        spring.retarget(5.0);
        let after = spring.evaluate(0.0);
        assert!((after - before).abs() < 1e-9, "{kind}: {before} -> {after}");

        let next = spring.evaluate(FRAME);
        assert!((next - before).abs() < 1.0, "{kind} jumped from {before} to {next}");
    }
}

#[test]
fn retarget_keeps_current_velocity() {
    for kind in SolverKind::ALL {
        let mut spring = build(kind, OscillatorConfig::new(), Boundary::new(10.0, 0.0));
        for _ in 0..5 {
            spring.evaluate(FRAME);
        }
        let velocity = spring.velocity();
        assert!(velocity < 0.0, "{kind} should be moving toward the target");
        spring.retarget(20.0);
        assert_eq!(spring.velocity(), velocity, "{kind}");
        assert_eq!(spring.boundary().initial_velocity, velocity, "{kind}");
        assert_eq!(spring.boundary().end_value, 20.0, "{kind}");
    }
}

#[test]
fn retarget_with_velocity_overrides_velocity() {
    for kind in SolverKind::ALL {
        let mut spring = build(kind, OscillatorConfig::new(), Boundary::new(0.0, 0.0));
        spring.retarget_with_velocity(0.0, 50.0);
        spring.evaluate(FRAME);
        assert!(spring.value() > 0.0, "{kind} should move with the new velocity");
    }
}

#[test]
fn retargeted_motion_settles_on_new_end() {
    for kind in SolverKind::ALL {
        let mut spring = build(kind, OscillatorConfig::new(), Boundary::new(10.0, 0.0));
        for _ in 0..20 {
            spring.evaluate(FRAME);
        }
        spring.retarget(-4.0);
        for _ in 0..180 {
            spring.evaluate(FRAME);
        }
        assert!((spring.value() + 4.0).abs() < 0.01, "{kind} ended at {}", spring.value());
    }
}

#[test]
fn initial_velocity_causes_excursion_then_decay() {
    let config = OscillatorConfig::try_new(5.0, 1.0, 169.0).unwrap();
    let boundary = Boundary::new(0.0, 0.0).with_initial_velocity(100.0);

    for kind in SolverKind::ALL {
        let mut spring = build(kind, config, boundary);
        let mut peak: f64 = 0.0;
        for _ in 0..20 {
            peak = peak.max(spring.evaluate(FRAME).abs());
        }
        assert!(peak > 4.0, "{kind} peak excursion was only {peak}");

        for _ in 0..600 {
            spring.evaluate(FRAME);
        }
        assert!(spring.value().abs() < 0.01, "{kind} ended at {}", spring.value());
    }
}

#[test]
fn one_long_frame_matches_many_short_ones() {
    for kind in SolverKind::ALL.into_iter().filter(|k| k.is_fixed_step()) {
        let config = OscillatorConfig::try_new(5.0, 1.0, 169.0).unwrap();
        let boundary = Boundary::new(10.0, 0.0);

        let mut long = build(kind, config, boundary);
        let mut short = build(kind, config, boundary);
        let h = short.step_size().unwrap();

        for _ in 0..6 {
            long.evaluate(4.0 * h);
            for _ in 0..4 {
                short.evaluate(h);
            }
        }
        assert!((long.value() - short.value()).abs() < 1e-9, "{kind}: {} vs {}", long.value(), short.value());
        assert!((long.velocity() - short.velocity()).abs() < 1e-7, "{kind}");
    }
}

#[test]
fn closed_form_frames_are_additive() {
    let config = OscillatorConfig::try_new(5.0, 1.0, 169.0).unwrap();
    let mut long = build(SolverKind::ClosedForm, config, Boundary::new(10.0, 0.0));
    let mut short = build(SolverKind::ClosedForm, config, Boundary::new(10.0, 0.0));

    long.evaluate(0.25);
    for _ in 0..5 {
        short.evaluate(0.05);
    }
    assert!((long.value() - short.value()).abs() < 1e-9);
}

#[test]
fn snap_to_target_rests_on_end() {
    for kind in SolverKind::ALL {
        let mut spring = build(kind, OscillatorConfig::new(), Boundary::new(10.0, 2.0));
        spring.evaluate(FRAME);
        spring.snap_to_target();
        assert_eq!(spring.value(), 2.0, "{kind}");
        assert_eq!(spring.velocity(), 0.0, "{kind}");
        assert_eq!(spring.evaluate(FRAME), 2.0, "{kind}");
        assert!(spring.is_settled(1e-6, 1e-6), "{kind}");
    }
}

#[test]
fn is_settled_tracks_motion() {
    for kind in SolverKind::ALL {
        let mut spring = build(kind, OscillatorConfig::new(), Boundary::new(0.0, 1.0));
        assert!(!spring.is_settled(0.01, 0.01), "{kind}");
        for _ in 0..300 {
            spring.evaluate(FRAME);
        }
        assert!(spring.is_settled(0.01, 0.01), "{kind}");
    }
}

#[test]
fn config_change_applies_on_next_evaluate() {
    for kind in SolverKind::ALL {
        let mut stiff = build(kind, OscillatorConfig::new(), Boundary::new(10.0, 0.0));
        let mut soft = build(kind, OscillatorConfig::new(), Boundary::new(10.0, 0.0));
        soft.config_mut().set_stiffness(16.0).unwrap();
        soft.config_mut().set_damping(8.0).unwrap();

        stiff.evaluate(0.1);
        soft.evaluate(0.1);
        assert!(soft.value() > stiff.value(), "{kind}: softer spring should lag behind");
    }
}

#[test]
fn boundary_writes_wait_for_reset() {
    for kind in SolverKind::ALL {
        let mut edited = build(kind, OscillatorConfig::new(), Boundary::new(10.0, 0.0));
        let mut untouched = build(kind, OscillatorConfig::new(), Boundary::new(10.0, 0.0));
        for _ in 0..10 {
            edited.evaluate(FRAME);
            untouched.evaluate(FRAME);
        }
        let before = edited.value();
        edited.boundary_mut().start_value = 25.0;
        edited.boundary_mut().end_value = 7.0;
        edited.boundary_mut().initial_velocity = 40.0;

        assert_eq!(edited.evaluate(0.0), before, "{kind} jumped on a boundary write");
        assert_eq!(edited.target(), 0.0, "{kind}");
        for _ in 0..5 {
            assert_eq!(edited.evaluate(FRAME), untouched.evaluate(FRAME), "{kind} followed the edited boundary early");
        }

        edited.reset();
        assert_eq!(edited.evaluate(0.0), 25.0, "{kind}");
        assert_eq!(edited.target(), 7.0, "{kind}");
        for _ in 0..300 {
            edited.evaluate(FRAME);
        }
        assert!((edited.value() - 7.0).abs() < 0.01, "{kind} ended at {}", edited.value());
    }
}
