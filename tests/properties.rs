use approx::assert_relative_eq;
use glam::Vec2;
use strand_morph::{
    arc_length_proportions, even_spacing, lerp, remove_consecutive_duplicates, resample,
    Plan, SimulationConfig, StepOutcome, StrandSimulation, TensionIntegrator, TransitionPlanner,
};

const MAX_STEPS: usize = 100_000;

fn chains() -> Vec<Vec<Vec2>> {
    vec![
        vec![Vec2::ZERO, Vec2::new(100.0, 0.0)],
        vec![Vec2::ZERO, Vec2::new(0.0, 150.0), Vec2::new(100.0, 300.0)],
        vec![
            Vec2::ZERO,
            Vec2::new(30.0, 80.0),
            Vec2::new(70.0, -40.0),
            Vec2::new(100.0, 0.0),
        ],
        vec![
            Vec2::new(200.0, 0.0),
            Vec2::new(200.0, 150.0),
            Vec2::new(0.0, 150.0),
            Vec2::new(0.0, 300.0),
            Vec2::new(100.0, 450.0),
        ],
        vec![Vec2::new(-50.0, 20.0), Vec2::new(60.0, 90.0), Vec2::new(-10.0, 240.0)],
    ]
}

fn run_to_rest(strand: &mut StrandSimulation) -> usize {
    for steps in 1..=MAX_STEPS {
        if !strand.step().unwrap().is_moving() {
            return steps;
        }
    }
    panic!("no rest within {MAX_STEPS} steps");
}

#[test]
fn proportions_span_zero_to_one() {
    for chain in chains() {
        let props = arc_length_proportions(&chain);
        assert_eq!(props.len(), chain.len());
        assert_eq!(props[0], 0.0);
        assert_eq!(*props.last().unwrap(), 1.0);
        assert!(props.windows(2).all(|w| w[0] <= w[1]));
    }
    assert_eq!(arc_length_proportions(&[Vec2::new(4.0, 2.0)]), vec![0.0]);
    assert!(arc_length_proportions(&[]).is_empty());
}

#[test]
fn resampling_at_own_proportions_reproduces_chain() {
    for chain in chains() {
        let samples = resample(&chain, &arc_length_proportions(&chain)).unwrap();
        assert_eq!(samples.len(), chain.len());
        for (sample, vertex) in samples.iter().zip(&chain) {
            assert_relative_eq!(sample.x, vertex.x, epsilon = 1e-3);
            assert_relative_eq!(sample.y, vertex.y, epsilon = 1e-3);
        }
    }
}

#[test]
fn lerp_endpoints_are_the_inputs() {
    let all = chains();
    let a = &all[2];
    let b: Vec<Vec2> = a.iter().map(|p| p.perp() * 2.0 + Vec2::ONE).collect();
    assert_eq!(&lerp(a, &b, 0.0).unwrap(), a);
    assert_eq!(lerp(a, &b, 1.0).unwrap(), b);
}

#[test]
fn even_spacing_of_five() {
    assert_eq!(even_spacing(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn consecutive_duplicates_are_removed() {
    let chain = [Vec2::ZERO, Vec2::ZERO, Vec2::ONE];
    assert_eq!(remove_consecutive_duplicates(&chain), vec![Vec2::ZERO, Vec2::ONE]);
}

#[test]
fn every_transition_terminates_on_its_target() {
    let all = chains();
    for source in &all {
        for target in &all {
            let mut strand = StrandSimulation::with_vertices(source, SimulationConfig::default());
            strand.transition_to(target).unwrap();
            assert!(strand.in_motion());

            run_to_rest(&mut strand);
            assert!(!strand.in_motion());
            assert_eq!(strand.vertices(), target.as_slice());
        }
    }
}

#[test]
fn duplicate_target_points_never_produce_nan() {
    let integrator = TensionIntegrator::default();
    let current = [Vec2::ZERO, Vec2::new(100.0, 0.0)];
    let target = [
        Vec2::ZERO,
        Vec2::new(50.0, 50.0),
        Vec2::new(50.0, 50.0),
        Vec2::new(100.0, 0.0),
    ];

    let mut state = match TransitionPlanner::default().plan(&current, &target).unwrap() {
        Plan::Simulate(state) => state,
        Plan::Snap => panic!("expected a simulated plan"),
    };

    let mut outcome = StepOutcome::Moving;
    for _ in 0..MAX_STEPS {
        outcome = integrator.step(&mut state).unwrap();
        assert!(
            state.mesh().iter().all(|p| p.is_finite()),
            "non-finite vertex in {:?}",
            state.mesh()
        );
        if !outcome.is_moving() {
            break;
        }
    }
    assert_eq!(outcome, StepOutcome::Settled);
    assert_eq!(state.mesh(), &target);
}

#[test]
fn straight_line_lifts_into_a_tent() {
    let mut strand = StrandSimulation::with_vertices(
        &[Vec2::ZERO, Vec2::new(10.0, 0.0)],
        SimulationConfig::default(),
    );
    let target = [Vec2::ZERO, Vec2::new(5.0, 5.0), Vec2::new(10.0, 0.0)];
    strand.transition_to(&target).unwrap();
    run_to_rest(&mut strand);

    let resampled = resample(strand.vertices(), &arc_length_proportions(&target)).unwrap();
    for (sample, vertex) in resampled.iter().zip(&target) {
        assert_relative_eq!(sample.x, vertex.x, epsilon = 1e-4);
        assert_relative_eq!(sample.y, vertex.y, epsilon = 1e-4);
    }
}

#[test]
fn scheduler_driven_transition_matches_stepped_one() {
    let source = [Vec2::ZERO, Vec2::new(100.0, 0.0)];
    let target = [Vec2::ZERO, Vec2::new(50.0, 40.0), Vec2::new(100.0, 0.0)];

    let mut stepped = StrandSimulation::with_vertices(&source, SimulationConfig::default());
    stepped.transition_to(&target).unwrap();
    let mut framed = stepped.clone();

    for _ in 0..40 {
        stepped.step().unwrap();
    }
    framed.frame(0.0).unwrap();
    assert_eq!(framed.frame(40.0).unwrap(), 40);

    assert_eq!(framed.vertices(), stepped.vertices());
}
