pub mod sweet;

pub use sweet::*;
