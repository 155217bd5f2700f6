pub mod block_observer;
pub mod block_source;
