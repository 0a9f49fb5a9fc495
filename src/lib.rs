pub mod dump;
pub mod sequence;

pub use sequence::BoundedSequence;
