pub mod walk;

#[cfg(feature = "tracing")]
pub mod trace_events;
