use super::*;
use crate::helpers::create_silent_logger;
use crate::helpers::oracle::*;

#[test]
fn can_compute_payoff_table_with_lexicographic_preservation() {
    let (mut oracle, objectives) = create_alternate_optimum_instance();

    let payoff = PayoffTable::compute(&mut oracle, &objectives, &create_silent_logger()).unwrap();

    assert_eq!(payoff.dimension(), 2);
    assert_eq!(payoff.anchor(0), 3.);
    // the pin on the primary anchor forces the alternate optimum (3, 2) to win over (3, 0)
    assert_eq!(payoff.get(0, 1), 2.);
    assert_eq!(payoff.anchor(1), 3.);
    assert_eq!(payoff.get(1, 0), 0.);
    assert_eq!(oracle.active_constraints(), 0);
}

#[test]
fn can_keep_anchor_values_best_in_column() {
    let (mut oracle, objectives) = create_conflicting_instance();

    let payoff = PayoffTable::compute(&mut oracle, &objectives, &create_silent_logger()).unwrap();

    let p = payoff.dimension();
    (0..p).for_each(|k| {
        (0..p).filter(|h| *h != k).for_each(|h| {
            assert!(payoff.get(k, k) >= payoff.get(h, k), "anchor {} is not the best value of objective {}", k, k);
        })
    });
    assert_eq!(oracle.active_constraints(), 0);
}

#[test]
fn can_fail_on_model_without_optimum() {
    let mut oracle = EnumOracle::new(vec![]);
    let objectives = vec![LinearExpr::variable(0), LinearExpr::variable(1)];

    let result = PayoffTable::compute(&mut oracle, &objectives, &create_silent_logger());

    assert!(result.unwrap_err().to_string().contains("no optimum"));
    assert_eq!(oracle.active_constraints(), 0);
}

#[test]
fn can_fail_on_single_objective() {
    let (mut oracle, objectives) = create_staircase_instance();

    let result = PayoffTable::compute(&mut oracle, &objectives[..1], &create_silent_logger());

    assert!(result.unwrap_err().to_string().contains("at least two objectives"));
}

#[test]
fn can_create_table_from_rows() {
    let payoff = PayoffTable::from_rows(vec![vec![3., 2.], vec![0., 3.]]).unwrap();

    assert_eq!(payoff.dimension(), 2);
    assert_eq!(payoff.anchor(1), 3.);
    assert_eq!(payoff.lower_bound(1), 2.);
    assert_eq!(payoff.range(1), 1.);
    assert_eq!(payoff.lower_bound(0), 0.);
    assert_eq!(payoff.range(0), 3.);
}

#[test]
fn cannot_create_table_from_invalid_rows() {
    assert!(PayoffTable::from_rows(vec![vec![1.]]).is_err());
    assert!(PayoffTable::from_rows(vec![vec![1., 2.], vec![3.]]).is_err());
}

#[test]
#[should_panic(expected = "payoff table index out of range")]
fn cannot_access_out_of_range_index() {
    let payoff = PayoffTable::from_rows(vec![vec![3., 2.], vec![0., 3.]]).unwrap();

    payoff.get(2, 0);
}
