//! # Advisor Core
//!
//! A forward-chaining production system that recommends one game from the
//! answers to a ten-question questionnaire.
//!
//! ## Core Components
//!
//! - **working_memory**: the fact store, with provenance and a recency clock
//! - **productions**: the fixed production set and its building blocks
//! - **inference**: the match / resolve / fire loop run to quiescence
//! - **explain**: derivation trees for facts in working memory
//! - **intake** / **report**: the boundaries to the user
//!
//! ## Running
//!
//! Load the production set, reset working memory, then run:
//!
//! ```no_run
//! use advisor_core::{ConsoleReporter, Engine, ScriptedIntake};
//! use game_catalog::{Question, UserAnswers};
//!
//! let mut engine = Engine::load();
//! engine.reset();
//! let mut intake = ScriptedIntake::new(UserAnswers::with_yes(&[Question::HasPc]));
//! let mut reporter = ConsoleReporter::new(std::io::stdout());
//! let report = engine.run(&mut intake, &mut reporter).unwrap();
//! println!("{:?}", report.recommendation);
//! ```

pub mod config;
pub mod error;
pub mod explain;
pub mod inference;
pub mod intake;
pub mod productions;
pub mod report;
pub mod working_memory;

pub use config::*;
pub use error::*;
pub use explain::*;
pub use inference::*;
pub use intake::*;
pub use productions::*;
pub use report::*;
pub use working_memory::*;
