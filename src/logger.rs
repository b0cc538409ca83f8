use std::{rc::Rc, sync::Arc};

/// Sink receiving the text rendered by
/// [`RangeList::render`](crate::generic::RangeList::render).
pub trait Logger {
	fn info(&self, message: &str);
}

/// Logger discarding every message.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullLogger;

impl Logger for NullLogger {
	fn info(&self, _message: &str) {}
}

/// Logger printing every message on the standard output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StdoutLogger;

impl Logger for StdoutLogger {
	fn info(&self, message: &str) {
		println!("{message}")
	}
}

/// Logger forwarding every message as a `tracing` event of level `INFO`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TracingLogger;

impl Logger for TracingLogger {
	fn info(&self, message: &str) {
		tracing::info!(target: "range_list", "{}", message)
	}
}

impl<'a, L: Logger + ?Sized> Logger for &'a L {
	fn info(&self, message: &str) {
		(**self).info(message)
	}
}

impl<L: Logger + ?Sized> Logger for Box<L> {
	fn info(&self, message: &str) {
		(**self).info(message)
	}
}

impl<L: Logger + ?Sized> Logger for Rc<L> {
	fn info(&self, message: &str) {
		(**self).info(message)
	}
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
	fn info(&self, message: &str) {
		(**self).info(message)
	}
}
