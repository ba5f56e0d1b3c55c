use std::fmt::Display;

pub trait ResultExt<T, E> {
	/// Logs the error, if any, at `warn` with `context`, and discards it.
	fn ok_or_log_with(self, context: &str) -> Option<T>
	where
		E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log_with(self, context: &str) -> Option<T>
	where
		E: Display,
	{
		self
			.inspect_err(|err| tracing::warn!(error = %err, "{context}"))
			.ok()
	}
}
