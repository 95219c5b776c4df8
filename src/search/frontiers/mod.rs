mod fifo;
mod frontier;
mod lifo;
mod priority;

pub use fifo::FifoFrontier;
pub use frontier::{Frontier, FrontierKey, FrontierOrdering};
pub use lifo::LifoFrontier;
pub use priority::PriorityFrontier;
