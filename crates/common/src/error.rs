/// Error types that can be built from a plain message string.
///
/// Implement this for a crate's error type, then invoke [`impl_context!`]
/// with that type to get `.context()` and `.with_context()` on any
/// `Result` whose error is displayable.
pub trait FromMessage: Sized {
    fn from_message(message: String) -> Self;

    /// Prefix `source` with `context`, as `"{context}: {source}"`.
    fn wrap(context: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::from_message(format!("{}: {source}", context.into()))
    }
}

/// Generate a crate-local `Context` trait converting foreign errors into
/// `$error` with a message prefix.
///
/// ```ignore
/// // in crates/config/src/error.rs
/// spud_common::impl_context!(Error);
///
/// std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
/// ```
#[macro_export]
macro_rules! impl_context {
    ($error:ty) => {
        pub trait Context<T> {
            fn context(self, context: impl Into<String>) -> std::result::Result<T, $error>;

            fn with_context<C, F>(self, f: F) -> std::result::Result<T, $error>
            where
                C: Into<String>,
                F: FnOnce() -> C;
        }

        impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
            fn context(self, context: impl Into<String>) -> std::result::Result<T, $error> {
                self.map_err(|source| <$error as $crate::FromMessage>::wrap(context, source))
            }

            fn with_context<C, F>(self, f: F) -> std::result::Result<T, $error>
            where
                C: Into<String>,
                F: FnOnce() -> C,
            {
                self.map_err(|source| <$error as $crate::FromMessage>::wrap(f(), source))
            }
        }
    };
}
