use oscillo::{
    Boundary, ClosedForm, Oscillator, OscillatorBank, OscillatorConfig, OscillatorError, Solver,
    SolverKind, VelocityVerlet,
};

#[test]
fn kinds_round_trip_through_solver() {
    for kind in SolverKind::ALL {
        let solver: Solver<f64> = Solver::new(kind, OscillatorConfig::new(), Boundary::default());
        assert_eq!(solver.kind(), kind);
        assert_eq!(solver.step_size().is_some(), kind.is_fixed_step());
        assert_eq!(solver.step_size().map(|h| h as f32), kind.default_step_size());
    }
}

#[test]
fn kind_names_are_distinct() {
    let names: Vec<_> = SolverKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names, ["closed-form", "semi-implicit-euler", "explicit-rk4", "velocity-verlet"]);
    assert_eq!(SolverKind::VelocityVerlet.to_string(), "velocity-verlet");
}

#[test]
fn step_size_is_settable_through_the_enum() {
    let mut solver: Solver<f64> = Solver::new(SolverKind::SemiImplicitEuler, OscillatorConfig::new(), Boundary::default());
    solver.set_step_size(1.0 / 240.0).unwrap();
    assert_eq!(solver.step_size(), Some(1.0 / 240.0));

    let mut exact: Solver<f64> = Solver::new(SolverKind::ClosedForm, OscillatorConfig::new(), Boundary::default());
    assert!(matches!(exact.set_step_size(0.01), Err(OscillatorError::FixedStepUnsupported { .. })));
}

#[test]
fn switch_to_keeps_config_and_boundary() {
    let config = OscillatorConfig::try_new(5.0, 2.0, 80.0).unwrap();
    let boundary = Boundary::new(4.0, -1.0).with_initial_velocity(2.0);
    let mut solver: Solver<f64> = Solver::new(SolverKind::ClosedForm, config, boundary);
    solver.switch_to(SolverKind::VelocityVerlet);

    assert_eq!(solver.kind(), SolverKind::VelocityVerlet);
    assert_eq!(*solver.config(), config);
    assert_eq!(*solver.boundary(), boundary);
    assert_eq!(solver.evaluate(0.0), 4.0);
}

#[test]
fn from_concrete_solver() {
    let solver: Solver<f32> = VelocityVerlet::default().into();
    assert_eq!(solver.kind(), SolverKind::VelocityVerlet);
    let solver: Solver<f32> = ClosedForm::default().into();
    assert_eq!(solver.kind(), SolverKind::ClosedForm);
}

#[test]
fn bank_steps_every_oscillator() {
    let mut bank: OscillatorBank<f64, ClosedForm<f64>> = OscillatorBank::from_fn(1000, |i| {
        ClosedForm::new(OscillatorConfig::new(), Boundary::new(i as f64, 0.0))
    });
    assert_eq!(bank.len(), 1000);

    let mut out = vec![0.0; bank.len()];
    bank.evaluate_into(1.0 / 60.0, &mut out);
    assert_eq!(out[0], 0.0);
    assert!(out[1..].iter().zip(1..).all(|(v, start)| *v < start as f64));

    for _ in 0..180 {
        bank.step(1.0 / 60.0);
    }
    assert!(bank.all_settled(0.01, 0.1));
}

#[test]
fn bank_of_mixed_solvers() {
    let mut bank: OscillatorBank<f32, Solver<f32>> = OscillatorBank::new();
    for kind in SolverKind::ALL {
        bank.add(Solver::new(kind, OscillatorConfig::new(), Boundary::new(10.0, 0.0)));
    }
    for _ in 0..30 {
        bank.step(1.0 / 60.0);
    }
    bank.retarget_all(3.0);
    for _ in 0..180 {
        bank.step(1.0 / 60.0);
    }
    assert!(bank.all_settled(0.01, 0.1));
    assert!(bank.as_slice().iter().all(|s| (s.value() - 3.0).abs() < 0.01));

    bank.reset_all();
    assert!(bank.as_slice().iter().all(|s| s.value() == s.boundary().start_value));
}

#[test]
fn bank_remove_and_clear() {
    let mut bank: OscillatorBank<f64, VelocityVerlet<f64>> = OscillatorBank::default();
    assert!(bank.is_empty());
    let a = bank.add(VelocityVerlet::new(OscillatorConfig::new(), Boundary::new(1.0, 0.0)));
    let b = bank.add(VelocityVerlet::new(OscillatorConfig::new(), Boundary::new(2.0, 0.0)));
    assert_eq!((a, b), (0, 1));

    let removed = bank.remove(0);
    assert_eq!(removed.value(), 1.0);
    assert_eq!(bank.get(0).map(|o| o.value()), Some(2.0));
    bank.get_mut(0).unwrap().retarget(5.0);
    assert_eq!(bank.get(0).unwrap().boundary().end_value, 5.0);

    bank.clear();
    assert!(bank.is_empty());
}
