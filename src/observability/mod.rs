//! Observability infrastructure for crash reports and internal errors.
//!
//! - **Context tracking**: thread-local analysis phase and sentence index
//! - **Progress tracking**: atomic document counters for batch runs
//! - **Panic hook**: structured crash report on stderr
//!
//! ```ignore
//! use sentimap::observability::install_panic_hook;
//!
//! fn main() {
//!     install_panic_hook();
//!     // ...
//! }
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, reset_context, set_phase,
    set_progress, set_sentence, AnalysisContext, AnalysisPhase, ContextGuard,
};
pub use panic_hook::{install_panic_hook, payload_message};
