use std::fmt;
use derive_more::Display;

pub trait MatTrait {
    fn shape(&self) -> (usize, usize);
    fn rows(&self) -> usize { self.shape().0 }
    fn cols(&self) -> usize { self.shape().1 }
    fn is_square(&self) -> bool {
        let (m, n) = self.shape();
        m == n
    }
}

pub trait Elem:
    Clone +
    Default +
    PartialEq +
    Send +
    Sync +
    fmt::Display +
    fmt::Debug +
    'static
{}

impl<T> Elem for T where T:
    Clone +
    Default +
    PartialEq +
    Send +
    Sync +
    fmt::Display +
    fmt::Debug +
    'static
{}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum MatError {
    #[display("shape mismatch: found {_0:?}, expected {_1:?}")]
    ShapeMismatch((usize, usize), (usize, usize))
}

impl std::error::Error for MatError {}
