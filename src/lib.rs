//! Sorting Visualizer Core
//!
//! Seven classic sorting procedures instrumented to report every notable
//! step for animation:
//! - **Bubble**, **Insertion**, **Selection**: O(n²) in-place sorts
//! - **Merge**: stable top-down merge sort with an accumulating "merged" marker
//! - **Quick**: Lomuto partitioning with an accumulating "sorted" marker
//! - **Heap**: max-heap extraction with a descending sorted boundary
//! - **Counting**: stable O(n + k) sort for small-range integers
//!
//! Procedures never sleep. They emit [`Step`]s into a [`StepSink`]; a
//! [`Session`] turns a recorded run into an `Idle`/`Running` state machine
//! and a [`Player`] paces it for a [`StepReporter`].
//!
//! ```
//! use sort_visualizer::{Algorithm, Config, Session};
//!
//! let mut session = Session::new(Algorithm::Merge, Config::default());
//! session.start().unwrap();
//! while let Some(step) = session.advance() {
//!     assert!(step.highlights.indices().len() <= 2);
//! }
//! assert_eq!(session.data(), &[10, 15, 20, 35, 45, 55, 60, 80]);
//! ```

pub mod algorithm;
pub mod bubble_sort;
pub mod config;
pub mod counting_sort;
pub mod error;
pub mod heap_sort;
pub mod insertion_sort;
pub mod lino_report;
pub mod merge_sort;
pub mod player;
pub mod quick_sort;
pub mod render;
pub mod selection_sort;
pub mod session;
pub mod step;

#[cfg(feature = "wasm")]
pub mod wasm_bindings;

pub use algorithm::Algorithm;
pub use config::Config;
pub use error::{Error, Result};
pub use player::{Player, RunStats, StepReporter};
pub use session::{RunState, RunTicket, Session};
pub use step::{Highlights, Progress, Step, StepKind, StepSink, Steps};
