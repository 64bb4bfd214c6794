use std::ops::{Mul, Div, MulAssign, DivAssign, Index, IndexMut};
use auto_impl_ops::auto_ops;
use num_traits::{Zero, One, Num};
use crate::{Elem, MatTrait};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContiguousMat<R> {
    shape: (usize, usize),
    data: Vec<R>
}

impl<R> MatTrait for ContiguousMat<R> {
    fn shape(&self) -> (usize, usize) {
        self.shape
    }
}

impl<R> ContiguousMat<R> {
    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [R] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<R> {
        self.data
    }

    pub(crate) fn row_at(&self, offset: usize) -> &[R] {
        &self.data[offset .. offset + self.shape.1]
    }

    pub(crate) fn row_at_mut(&mut self, offset: usize) -> &mut [R] {
        let n = self.shape.1;
        &mut self.data[offset .. offset + n]
    }
}

impl<R> ContiguousMat<R>
where R: Elem {
    pub fn filled(shape: (usize, usize), a: R) -> Self {
        let data = vec![a; shape.0 * shape.1];
        Self { shape, data }
    }

    // Short input pads with the default value, excess input is dropped.
    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> {
        let len = shape.0 * shape.1;
        let mut data: Vec<R> = data.into_iter().take(len).collect();
        data.resize(len, R::default());
        Self { shape, data }
    }

    pub fn zero(shape: (usize, usize)) -> Self
    where R: Zero {
        Self::filled(shape, R::zero())
    }

    pub fn id(size: usize) -> Self
    where R: Zero + One {
        let mut res = Self::zero((size, size));
        for i in 0..size {
            res[(i, i)] = R::one();
        }
        res
    }
}

impl<R> Index<(usize, usize)> for ContiguousMat<R> {
    type Output = R;
    fn index(&self, (i, j): (usize, usize)) -> &R {
        &self.data[i * self.shape.1 + j]
    }
}

impl<R> IndexMut<(usize, usize)> for ContiguousMat<R> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut R {
        &mut self.data[i * self.shape.1 + j]
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for ContiguousMat<R>
where R: Elem + Num {
    fn mul_assign(&mut self, rhs: &R) {
        for a in self.data.iter_mut() {
            *a = a.clone() * rhs.clone();
        }
    }
}

#[auto_ops]
impl<R> DivAssign<&R> for ContiguousMat<R>
where R: Elem + Num {
    fn div_assign(&mut self, rhs: &R) {
        for a in self.data.iter_mut() {
            *a = a.clone() / rhs.clone();
        }
    }
}
