pub use crate::MatTrait;

mod buf;
pub use buf::ContiguousMat;

mod mat;
pub use mat::Mat;

pub mod gauss;
