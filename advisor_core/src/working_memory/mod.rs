//! Working memory - the fact store the inference loop reads and writes.
//!
//! - **Facts**: typed records, fixed at assertion time
//! - **Patterns**: what a production condition looks for
//! - **Store**: live facts indexed by kind, plus retired facts kept for explanations

mod fact;
mod pattern;
mod store;

pub use fact::*;
pub use pattern::*;
pub use store::*;
