pub mod missing;
pub mod sort;
pub mod suggest;

pub use missing::{detect_all_missing, detect_missing, update_field};
pub use sort::{Direction, SortColumn, SortState};
pub use suggest::{confidence, suggest, Confidence};
