pub mod lenient;
pub mod trace;
