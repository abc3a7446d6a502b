#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, ordering `NaN` after any other value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Returns the index of the smallest value, keeping the lowest index when values tie.
pub fn argmin_floats<I>(values: I) -> Option<usize>
where
    I: Iterator<Item = Float>,
{
    let mut smallest: Option<(usize, Float)> = None;

    for (index, value) in values.enumerate() {
        let replace = match smallest {
            Some((_, smallest_value)) => compare_floats(value, smallest_value) == Ordering::Less,
            None => true,
        };

        if replace {
            smallest = Some((index, value));
        }
    }

    smallest.map(|(index, _)| index)
}
