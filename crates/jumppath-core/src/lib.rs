mod pqueue;

pub use crate::pqueue::*;
