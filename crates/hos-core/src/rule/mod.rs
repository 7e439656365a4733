mod budget;
mod cycle;
mod evaluator;
mod state;


pub use evaluator::{evaluate, evaluate_segments};
