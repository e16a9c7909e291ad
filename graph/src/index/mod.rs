pub mod category;
pub mod degree;

pub use category::CategoryIndex;
pub use degree::DegreeIndex;
