//! Containers deciding the visiting order of traversals.
//!
//! ```plain
//!            TraversalContainer
//!                    |
//!      +-------------+--------------+
//!      |             |              |
//!  FifoQueue     LifoStack    PriorityQueue
//!  (breadth)      (depth)     (best first)
//! ```
mod traits;
pub use self::traits::*;

mod queue;
pub use self::queue::*;

mod priority_queue;
pub use self::priority_queue::*;
