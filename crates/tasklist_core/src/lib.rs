pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;

pub use model::{Priority, Task};
pub use query::{PriorityFilter, SortOrder, StatusFilter, TaskQuery};
pub use store::TaskStore;
