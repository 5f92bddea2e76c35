pub mod day12;
pub mod day15;
