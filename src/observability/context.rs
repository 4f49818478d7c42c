//! Thread-local context tracking for crash reports and internal errors.
//!
//! Records which stage of an analysis the current thread is in, and which
//! sentence it is looking at. Batch runs also keep global document counters.
//!
//! ## Thread Safety
//!
//! - Thread-local context: each thread (including rayon workers) has its own
//! - Global progress: atomic counters for documents processed/total
//! - Guards restore the previous context on drop, except while unwinding, so
//!   the request boundary can still read where a panic happened

use serde::Serialize;
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

static DOCUMENTS_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static DOCUMENTS_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

/// Snapshot of what the current thread is doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    /// Zero-based index of the sentence being classified
    pub sentence_index: Option<usize>,
}

impl AnalysisContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            sentence_index: None,
        }
    }
}

/// Stages of a single classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPhase {
    /// Running the polarity scorer
    Scoring,
    /// Splitting the text into sentences
    Segmentation,
    /// Labelling the whole text or a sentence
    Classification,
    /// Tallying sentence labels into the final report
    Aggregation,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scoring => write!(f, "scoring"),
            Self::Segmentation => write!(f, "segmentation"),
            Self::Classification => write!(f, "classification"),
            Self::Aggregation => write!(f, "aggregation"),
        }
    }
}

/// Restores the previous context when dropped.
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        // keep the failing context visible to whoever catches the panic
        if std::thread::panicking() {
            return;
        }
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(apply: impl FnOnce(&mut AnalysisContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current analysis phase until the guard drops.
///
/// ```ignore
/// let _phase = set_phase(AnalysisPhase::Segmentation);
/// let sentences = splitter.split(text);
/// ```
#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

/// Set the sentence being classified until the guard drops.
#[must_use]
pub fn set_sentence(index: usize) -> ContextGuard {
    update(|ctx| ctx.sentence_index = Some(index))
}

#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = AnalysisContext::new();
    });
}

/// Set the batch counters (processed and total documents).
pub fn set_progress(processed: usize, total: usize) {
    DOCUMENTS_PROCESSED.store(processed, Ordering::Relaxed);
    DOCUMENTS_TOTAL.store(total, Ordering::Relaxed);
}

/// Thread-safe; called from rayon workers.
pub fn increment_processed() {
    DOCUMENTS_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

/// Current (processed, total) document counts.
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        DOCUMENTS_PROCESSED.load(Ordering::Relaxed),
        DOCUMENTS_TOTAL.load(Ordering::Relaxed),
    )
}
