pub mod compose;
pub mod invert;
pub mod print;
pub mod transform;
