//! Paced delivery of traversal events to an observer.
//!
//! The traversal runs on a producer thread and sends its events through a
//! rendezvous channel. The observer runs on the calling thread, which is the
//! only thread that touches rendering state. The pause between steps happens
//! on the consumer side, so pacing never changes event order or the
//! producer's visited state.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::graph::algos::CancelToken;
use crate::graph::traversal::AdjacencyProvider;
use crate::graph::types::{
    Algorithm, TraversalEvent, TraversalOptions, TraversalStats, TraversalSummary, VertexId,
};

/// Consumer of traversal events
pub trait TraversalObserver {
    fn on_event(&mut self, event: &TraversalEvent);

    /// Called once after the last event.
    fn on_finish(&mut self, _stats: &TraversalStats, _cancelled: bool) {}
}

impl<F: FnMut(&TraversalEvent)> TraversalObserver for F {
    fn on_event(&mut self, event: &TraversalEvent) {
        self(event)
    }
}

/// Options for paced playback
#[derive(Debug, Clone, Default)]
pub struct PlaybackOptions {
    /// Pause before every visit after the first
    pub step_delay: Duration,
    pub traversal: TraversalOptions,
    pub cancel: Option<CancelToken>,
    /// Keep every event in [`TraversalSummary::events`]. Observers already
    /// see each event, so only callers that need the full log turn this on.
    pub keep_events: bool,
}

/// Run a traversal on a producer thread and feed its events to `observer`.
///
/// Returns the collected summary once the producer has finished.
#[tracing::instrument(skip(graph, options, observer), fields(delay_ms = options.step_delay.as_millis() as u64))]
pub fn play<G, O>(
    graph: &G,
    algorithm: Algorithm,
    start: VertexId,
    options: &PlaybackOptions,
    observer: &mut O,
) -> TraversalSummary
where
    G: AdjacencyProvider + Sync + ?Sized,
    O: TraversalObserver + ?Sized,
{
    let (tx, rx) = mpsc::sync_channel::<TraversalEvent>(0);
    let traversal_opts = options.traversal;
    let cancel = options.cancel.clone();

    thread::scope(|scope| {
        let producer = scope.spawn(move || {
            let mut traversal = algorithm.traverse_with(graph, start, traversal_opts, cancel);
            for event in traversal.by_ref() {
                if tx.send(event).is_err() {
                    break;
                }
            }
            (traversal.stats(), traversal.is_cancelled())
        });

        let mut summary = TraversalSummary::new(algorithm, start);
        let mut paced = false;
        for event in rx.iter() {
            if event.as_visit().is_some() {
                if paced && !options.step_delay.is_zero() {
                    thread::sleep(options.step_delay);
                }
                paced = true;
            }
            observer.on_event(&event);
            if options.keep_events {
                summary.record(event);
            } else {
                summary.observe(&event);
            }
        }

        let (stats, cancelled) = match producer.join() {
            Ok(result) => result,
            Err(payload) => std::panic::resume_unwind(payload),
        };
        summary.stats = stats;
        summary.cancelled = cancelled;
        crate::log_traversal_stats!(stats, algorithm.as_str());
        observer.on_finish(&stats, cancelled);
        summary
    })
}
