//! Layout constants for rendered traversals.

/// Number of spaces prepended per tree level when a traversal is rendered.
pub const INDENT_WIDTH: usize = 2;

/// `tracing` target used by [`LogSink`](crate::LogSink).
pub const TRAVERSAL_TARGET: &str = "employee_bst::traversal";
