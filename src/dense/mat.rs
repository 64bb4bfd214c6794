use std::fmt;
use std::ops::{Add, Sub, Mul, Div, AddAssign, SubAssign, MulAssign, DivAssign, Index, IndexMut};
use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::{zip_eq, Itertools};
use num_traits::{Zero, One, Num, Signed};
use crate::{Elem, MatTrait};
use crate::algo::multiply_accumulate;
use super::ContiguousMat;

// Elements live in a contiguous row-major buffer; `row_idx[i]` is the
// buffer offset of logical row `i`. Row swaps permute `row_idx` only.
#[derive(Clone, Debug)]
pub struct Mat<R> {
    buf: ContiguousMat<R>,
    row_idx: Vec<usize>
}

impl<R> MatTrait for Mat<R> {
    delegate! {
        to self.buf {
            fn shape(&self) -> (usize, usize);
        }
    }
}

impl<R> From<ContiguousMat<R>> for Mat<R> {
    fn from(buf: ContiguousMat<R>) -> Self {
        let (m, n) = buf.shape();
        let row_idx = (0..m).map(|i| i * n).collect();
        Self { buf, row_idx }
    }
}

impl<R> Mat<R> {
    pub fn buf(&self) -> &ContiguousMat<R> {
        &self.buf
    }

    pub fn into_buf(self) -> ContiguousMat<R> {
        self.buf
    }

    pub fn row(&self, i: usize) -> &[R] {
        self.buf.row_at(self.row_idx[i])
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [R] {
        self.buf.row_at_mut(self.row_idx[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        (0..self.rows()).flat_map(move |i|
            self.row(i).iter().enumerate().map(move |(j, a)| (i, j, a))
        )
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.row_idx.swap(i, j);
    }

    // Logical rows `i` and `j` as (src, dst) slices, `i != j`.
    fn two_rows_mut(&mut self, i: usize, j: usize) -> (&[R], &mut [R]) {
        debug_assert_ne!(i, j);
        let n = self.cols();
        let (oi, oj) = (self.row_idx[i], self.row_idx[j]);
        let data = self.buf.data_mut();
        if oi < oj {
            let (lo, hi) = data.split_at_mut(oj);
            (&lo[oi .. oi + n], &mut hi[.. n])
        } else {
            let (lo, hi) = data.split_at_mut(oi);
            (&hi[.. n], &mut lo[oj .. oj + n])
        }
    }
}

impl<R> Mat<R>
where R: Elem {
    pub fn filled(shape: (usize, usize), a: R) -> Self {
        ContiguousMat::filled(shape, a).into()
    }

    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> {
        ContiguousMat::from_data(shape, data).into()
    }

    pub fn zero(shape: (usize, usize)) -> Self
    where R: Zero {
        ContiguousMat::zero(shape).into()
    }

    pub fn id(size: usize) -> Self
    where R: Zero + One {
        ContiguousMat::id(size).into()
    }

    pub fn mul_row(&mut self, i: usize, r: &R)
    where R: Num {
        for a in self.row_mut(i) {
            *a = a.clone() * r.clone();
        }
    }

    // row_j += r * row_i
    pub fn add_row_to(&mut self, i: usize, j: usize, r: &R)
    where R: Num {
        let (src, dst) = self.two_rows_mut(i, j);
        for (y, x) in zip_eq(dst, src) {
            *y = y.clone() + r.clone() * x.clone();
        }
    }

    pub fn pivot_in_col(&self, col: usize, from_row: usize) -> (usize, R)
    where R: Signed + PartialOrd {
        self.pivot_in_col_by(col, from_row, |a, b| a < b)
    }

    // Among rows `from_row..`, the row maximizing |element| in `col` under
    // the strict order `lt`, together with the signed element. Ties keep
    // the earliest row.
    pub fn pivot_in_col_by<F>(&self, col: usize, from_row: usize, lt: F) -> (usize, R)
    where R: Signed, F: Fn(&R, &R) -> bool {
        let mut max_row = from_row;
        for r in from_row .. self.rows() {
            if lt(&self[(max_row, col)].abs(), &self[(r, col)].abs()) {
                max_row = r;
            }
        }
        (max_row, self[(max_row, col)].clone())
    }

    pub fn transposed(&self) -> Self {
        let (m, n) = self.shape();
        let data = (0..n).cartesian_product(0..m).map(|(j, i)|
            self[(i, j)].clone()
        );
        Self::from_data((n, m), data)
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
}

impl<R> Index<(usize, usize)> for Mat<R> {
    type Output = R;
    fn index(&self, (i, j): (usize, usize)) -> &R {
        &self.buf.data()[self.row_idx[i] + j]
    }
}

impl<R> IndexMut<(usize, usize)> for Mat<R> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut R {
        &mut self.buf.data_mut()[self.row_idx[i] + j]
    }
}

impl<R> Index<usize> for Mat<R> {
    type Output = [R];
    fn index(&self, i: usize) -> &[R] {
        self.row(i)
    }
}

impl<R> IndexMut<usize> for Mat<R> {
    fn index_mut(&mut self, i: usize) -> &mut [R] {
        self.row_mut(i)
    }
}

// Equality is logical: physical row permutations are invisible.
impl<R> PartialEq for Mat<R>
where R: PartialEq {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() &&
        (0..self.rows()).all(|i| self.row(i) == other.row(i))
    }
}

impl<R> Eq for Mat<R> where R: Eq {}

impl<R> fmt::Display for Mat<R>
where R: Elem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = (0..self.rows()).map(|i|
            self.row(i).iter().join(" ")
        ).join("; ");
        write!(f, "[{}]", body)
    }
}

#[auto_ops]
impl<R> AddAssign<&Mat<R>> for Mat<R>
where R: Elem + Num {
    fn add_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape(), "shape mismatch");
        for i in 0..self.rows() {
            for (x, y) in zip_eq(self.row_mut(i), rhs.row(i)) {
                *x = x.clone() + y.clone();
            }
        }
    }
}

#[auto_ops]
impl<R> SubAssign<&Mat<R>> for Mat<R>
where R: Elem + Num {
    fn sub_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape(), "shape mismatch");
        for i in 0..self.rows() {
            for (x, y) in zip_eq(self.row_mut(i), rhs.row(i)) {
                *x = x.clone() - y.clone();
            }
        }
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for Mat<R>
where R: Elem + Num {
    fn mul_assign(&mut self, rhs: &R) {
        self.buf *= rhs;
    }
}

#[auto_ops]
impl<R> DivAssign<&R> for Mat<R>
where R: Elem + Num {
    fn div_assign(&mut self, rhs: &R) {
        self.buf /= rhs;
    }
}

// Row-by-row dots against the transposed right operand. The result is
// fully built before `self` is replaced.
#[auto_ops]
impl<R> MulAssign<&Mat<R>> for Mat<R>
where R: Elem + Num {
    fn mul_assign(&mut self, rhs: &Self) {
        assert_eq!(self.cols(), rhs.rows(), "shape mismatch");
        let t = rhs.transposed();
        let data = (0..self.rows()).cartesian_product(0..t.rows()).map(|(i, j)|
            multiply_accumulate(self.row(i), t.row(j), R::zero())
        );
        *self = Self::from_data((self.rows(), rhs.cols()), data);
    }
}
