use log::{debug, trace};
use num_traits::{Float, Signed, Zero, One};
use crate::{Elem, MatTrait, MatError};
use super::Mat;

pub fn gauss_jordan<R>(a: &Mat<R>) -> (Mat<R>, usize)
where R: Elem + Signed + PartialOrd {
    let mut copy = a.clone();
    let swaps = gauss_jordan_in_place(&mut copy);
    (copy, swaps)
}

// Partial-pivoted Gauss-Jordan. Clears above and below each pivot but
// never scales the pivot row, so the diagonal keeps the pivot values.
// Returns the number of row swaps that moved rows. A zero pivot divides
// anyway; float input turns non-finite, which callers read as singular.
pub fn gauss_jordan_in_place<R>(a: &mut Mat<R>) -> usize
where R: Elem + Signed + PartialOrd {
    debug!("start gauss-jordan: {:?}.", a.shape());
    trace!("{}", a);

    let m = a.rows();
    let mut swaps = 0;

    for i in 0..m {
        let (p_row, p) = a.pivot_in_col(i, i);
        if p_row != i {
            a.swap_rows(i, p_row);
            swaps += 1;
        }

        for r in 0..m {
            if r == i { continue }
            let c = a[(r, i)].clone() / p.clone();
            a.add_row_to(i, r, &(-c));
        }
    }

    debug!("gauss-jordan done: {:?}, {} swaps.", a.shape(), swaps);
    trace!("{}", a);

    swaps
}

pub fn det<R>(a: &Mat<R>) -> Result<R, MatError>
where R: Elem + Float + Signed {
    if !a.is_square() {
        return Err(MatError::ShapeMismatch(a.shape(), (a.rows(), a.rows())));
    }

    let (red, swaps) = gauss_jordan(a);
    let prod = (0..red.rows()).fold(R::one(), |acc, i| acc * red[(i, i)]);

    Ok(if swaps % 2 == 1 { -prod } else { prod })
}

// Bareiss fraction-free elimination. Every interior division is exact,
// so integer determinants come out exact rather than truncated.
pub fn det_exact<R>(a: &Mat<R>) -> Result<R, MatError>
where R: Elem + Signed {
    if !a.is_square() {
        return Err(MatError::ShapeMismatch(a.shape(), (a.rows(), a.rows())));
    }

    let n = a.rows();
    if n == 0 {
        return Ok(R::one());
    }

    debug!("start bareiss: {:?}.", a.shape());

    let mut m = a.clone();
    let mut sign = R::one();
    let mut prev = R::one();

    for k in 0 .. n - 1 {
        if m[(k, k)].is_zero() {
            let Some(r) = (k + 1 .. n).find(|&r| !m[(r, k)].is_zero()) else {
                return Ok(R::zero());
            };
            m.swap_rows(k, r);
            sign = -sign;
        }

        for i in k + 1 .. n {
            for j in k + 1 .. n {
                let x = m[(i, j)].clone() * m[(k, k)].clone()
                      - m[(i, k)].clone() * m[(k, j)].clone();
                m[(i, j)] = x / prev.clone();
            }
        }
        prev = m[(k, k)].clone();
    }

    trace!("{}", m);

    Ok(sign * m[(n - 1, n - 1)].clone())
}
