#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/linalg_test.rs"]
mod linalg_test;

use crate::utils::Float;

/// A pivot below this magnitude marks the system as numerically singular.
const SINGULARITY_EPSILON: Float = 1e-12;

/// Solves the square linear system `matrix * x = rhs` using Gaussian elimination with
/// partial pivoting. The inputs stay untouched.
///
/// Returns `None` when the system is singular or close enough to singular that no
/// meaningful solution exists, e.g. when two rows are equal or collinear.
pub fn solve_linear_system(matrix: &[Vec<Float>], rhs: &[Float]) -> Option<Vec<Float>> {
    let size = matrix.len();
    debug_assert!(matrix.iter().all(|row| row.len() == size));
    debug_assert_eq!(rhs.len(), size);

    let mut rows: Vec<Vec<Float>> = matrix
        .iter()
        .zip(rhs.iter())
        .map(|(row, value)| {
            let mut augmented = row.clone();
            augmented.push(*value);
            augmented
        })
        .collect();

    for column in 0..size {
        let mut pivot_row = column;
        for row in column + 1..size {
            if rows[row][column].abs() > rows[pivot_row][column].abs() {
                pivot_row = row;
            }
        }

        if rows[pivot_row][column].abs() < SINGULARITY_EPSILON {
            return None;
        }

        rows.swap(pivot_row, column);

        let (upper, lower) = rows.split_at_mut(column + 1);
        let pivot = &upper[column];
        for row in lower.iter_mut() {
            let factor = row[column] / pivot[column];
            if factor != 0. {
                for index in column..=size {
                    row[index] -= pivot[index] * factor;
                }
            }
        }
    }

    let mut solution = vec![0.; size];
    for column in (0..size).rev() {
        let mut value = rows[column][size];
        for index in column + 1..size {
            value -= rows[column][index] * solution[index];
        }
        solution[column] = value / rows[column][column];
    }

    if solution.iter().all(|value| value.is_finite()) { Some(solution) } else { None }
}
