use super::*;

#[test]
fn can_solve_identity_system() {
    let matrix = vec![vec![1., 0.], vec![0., 1.]];

    let solution = solve_linear_system(&matrix, &[3., 4.]).unwrap();

    assert_eq!(solution, vec![3., 4.]);
}

#[test]
fn can_solve_three_dimensional_system() {
    // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3 has the solution (2, 3, -1)
    let matrix = vec![vec![2., 1., -1.], vec![-3., -1., 2.], vec![-2., 1., 2.]];

    let solution = solve_linear_system(&matrix, &[8., -11., -3.]).unwrap();

    assert_eq!(solution.len(), 3);
    assert!((solution[0] - 2.).abs() < 1e-9);
    assert!((solution[1] - 3.).abs() < 1e-9);
    assert!((solution[2] + 1.).abs() < 1e-9);
}

#[test]
fn can_solve_system_requiring_pivoting() {
    let matrix = vec![vec![0., 1.], vec![1., 0.]];

    let solution = solve_linear_system(&matrix, &[5., 7.]).unwrap();

    assert_eq!(solution, vec![7., 5.]);
}

#[test]
fn can_detect_singular_system() {
    let matrix = vec![vec![1., 2.], vec![2., 4.]];

    assert!(solve_linear_system(&matrix, &[1., 1.]).is_none());
}

#[test]
fn can_detect_zero_matrix() {
    let matrix = vec![vec![0., 0.], vec![0., 0.]];

    assert!(solve_linear_system(&matrix, &[1., 1.]).is_none());
}
