pub mod types;
pub mod math;
pub mod tables;
pub mod signal;
mod core;
pub mod complex;

pub use complex::{fix_fft, fix_fft_complex, FixFft};
pub use signal::{FixedSignal, SplitSignal};
pub use types::Q15;
