mod cow;
mod error;
mod iter;
mod queue;
mod range;
mod stats;
mod traits;

pub use cow::SharedQueue;
pub use error::QueueError;
pub use iter::{IntoIter, Iter, IterMut};
pub use queue::FifoQueue;
pub use stats::QueueStats;
pub use traits::{Queue, RangeReplace};
