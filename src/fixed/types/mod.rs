mod q15;

pub use q15::Q15;
