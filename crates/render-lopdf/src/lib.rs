//! PDF document sink using lopdf.
//!
//! Draw calls are buffered per page as content-stream operations; every call
//! to `serialize` assembles a complete PDF from the buffered pages, so
//! successive snapshots only ever grow.

mod metrics;
mod sink;

pub use metrics::StandardFont;
pub use sink::LopdfSink;
