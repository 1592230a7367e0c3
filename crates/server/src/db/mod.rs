pub mod matches;
pub mod pool;
