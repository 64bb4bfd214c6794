use std::ops::{Add, Mul};
use itertools::zip_eq;

pub fn multiply_accumulate<R>(a: &[R], b: &[R], init: R) -> R
where R: Clone + Add<Output = R> + Mul<Output = R> {
    zip_eq(a, b).fold(init, |acc, (x, y)|
        acc + x.clone() * y.clone()
    )
}
