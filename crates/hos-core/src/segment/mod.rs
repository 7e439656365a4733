mod builder;
mod types;

#[cfg(test)]
mod tests;

pub use builder::build_segments;
pub use types::Segment;
