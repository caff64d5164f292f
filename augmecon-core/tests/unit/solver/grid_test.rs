use super::*;
use std::collections::HashSet;

fn create_payoff(rows: Vec<Vec<Float>>) -> PayoffTable {
    PayoffTable::from_rows(rows).unwrap()
}

fn create_three_objective_grid() -> EpsilonGrid {
    // objective 1 spreads over [10, 40], objective 2 over [2, 8]
    let payoff = create_payoff(vec![vec![0., 10., 5.], vec![0., 40., 2.], vec![0., 22., 8.]]);
    let spec = GridSpec::default().with_steps(1, 2).unwrap().with_steps(2, 2).unwrap();

    EpsilonGrid::new(&payoff, &spec)
}

#[test]
fn can_enumerate_grid_in_odometer_order() {
    let grid = create_three_objective_grid();

    let indices = grid.points().map(|point| (point.indices[0], point.indices[1])).collect::<Vec<_>>();

    assert_eq!(grid.point_count(), 9);
    assert_eq!(
        indices,
        vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
    );
}

#[test]
fn can_map_indices_to_epsilons() {
    let grid = create_three_objective_grid();

    let mut points = grid.points();

    assert_eq!(points.next().unwrap().epsilons, vec![10., 2.]);
    assert_eq!(points.nth(3).unwrap().epsilons, vec![25., 5.]);
    assert_eq!(points.last().unwrap().epsilons, vec![40., 8.]);
}

#[test]
fn can_restart_enumeration() {
    let grid = create_three_objective_grid();

    let first_pass = grid.points().map(|point| point.indices).collect::<Vec<_>>();
    let second_pass = grid.points().map(|point| point.indices).collect::<Vec<_>>();

    assert_eq!(first_pass, second_pass);
}

parameterized_test! {can_count_grid_points, (steps, expected), {
    can_count_grid_points_impl(steps, expected);
}}

can_count_grid_points! {
    case_01_two_objectives: (vec![(1, 3)], 4),
    case_02_three_objectives: (vec![(1, 2), (2, 2)], 9),
    case_03_mixed_resolution: (vec![(1, 1), (2, 4)], 10),
}

fn can_count_grid_points_impl(steps: Vec<(usize, usize)>, expected: usize) {
    let dimension = steps.len() + 1;
    let maximum = steps.iter().map(|(_, steps)| *steps).collect::<Vec<_>>();
    let payoff = create_payoff(vec![vec![0.; dimension]; dimension]);
    let spec = steps
        .into_iter()
        .try_fold(GridSpec::default(), |spec, (objective, steps)| spec.with_steps(objective, steps))
        .unwrap();

    let grid = EpsilonGrid::new(&payoff, &spec);
    let visited = grid.points().map(|point| point.indices).collect::<Vec<_>>();
    let distinct = visited.iter().cloned().collect::<HashSet<_>>();

    assert_eq!(grid.point_count(), expected);
    assert_eq!(visited.len(), expected);
    assert_eq!(distinct.len(), expected);
    assert_eq!(visited.first(), Some(&vec![0; dimension - 1]));
    assert_eq!(visited.last(), Some(&maximum));
}

#[test]
fn can_use_default_resolution() {
    assert_eq!(GridSpec::default().steps(1), DEFAULT_GRID_STEPS);
    assert_eq!(GridSpec::uniform(3, 5).unwrap().steps(1), 5);
    assert_eq!(GridSpec::uniform(3, 5).unwrap().steps(2), 5);
}

#[test]
fn can_reject_invalid_grid_spec() {
    assert!(GridSpec::default().with_steps(0, 2).is_err());
    assert!(GridSpec::default().with_steps(1, 0).is_err());
}

#[test]
fn can_handle_zero_range_dimension() {
    let payoff = create_payoff(vec![vec![1., 7.], vec![5., 7.]]);

    let grid = EpsilonGrid::new(&payoff, &GridSpec::default());

    assert_eq!(grid.point_count(), 4);
    assert!(grid.points().all(|point| point.epsilons == vec![7.]));
}
