//! Failures observed by `error` hooks.

use core::any::Any;
use core::fmt;

/// Anything an operation may fail with: an `Err` value of a `try_invoke`
/// operation. Blanket-implemented for every `Debug + 'static` type.
pub trait Reason: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug> Reason for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Borrowed view of the failure leaving an operation.
///
/// Hooks only ever see `&Failure`; they can inspect it but the engine always
/// re-raises the original value afterwards.
#[derive(Clone, Copy)]
pub struct Failure<'a> {
    kind: Kind<'a>,
}

#[derive(Clone, Copy)]
enum Kind<'a> {
    Error(&'a dyn Reason),
    Panic(&'a (dyn Any + Send)),
}

impl<'a> Failure<'a> {
    /// An `Err` value returned by the operation.
    pub fn error<E: Reason>(error: &'a E) -> Self {
        Failure { kind: Kind::Error(error) }
    }

    /// A panic payload caught while the operation unwound.
    pub fn panic(payload: &'a (dyn Any + Send)) -> Self {
        Failure { kind: Kind::Panic(payload) }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, Kind::Error(_))
    }

    pub fn is_panic(&self) -> bool {
        matches!(self.kind, Kind::Panic(_))
    }

    /// The failure value as `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        match self.kind {
            Kind::Error(error) => error.as_any().downcast_ref(),
            Kind::Panic(payload) => payload.downcast_ref(),
        }
    }

    /// The panic message, for `&str` and `String` payloads.
    pub fn message(&self) -> Option<&'a str> {
        match self.kind {
            Kind::Error(_) => None,
            Kind::Panic(payload) => payload
                .downcast_ref::<&'static str>()
                .copied()
                .or_else(|| payload.downcast_ref::<String>().map(String::as_str)),
        }
    }
}

impl fmt::Debug for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Error(error) => f.debug_tuple("Error").field(&error).finish(),
            Kind::Panic(_) => f.debug_tuple("Panic").field(&self.message()).finish(),
        }
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Error(error) => write!(f, "{error:?}"),
            Kind::Panic(_) => match self.message() {
                Some(message) => write!(f, "panicked: {message}"),
                None => f.write_str("panicked with a non-string payload"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Overdrawn(u64);

    #[test]
    fn error_downcasts_to_original() {
        let error = Overdrawn(40);
        let failure = Failure::error(&error);
        assert!(failure.is_error());
        assert!(core::ptr::eq(failure.downcast_ref::<Overdrawn>().unwrap(), &error));
        assert_eq!(failure.message(), None);
        assert_eq!(failure.to_string(), "Overdrawn(40)");
    }

    #[test]
    fn panic_message_from_str_and_string() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(Failure::panic(&*payload).message(), Some("boom"));

        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        let failure = Failure::panic(&*payload);
        assert!(failure.is_panic());
        assert_eq!(failure.to_string(), "panicked: bang");

        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(Failure::panic(&*payload).to_string(), "panicked with a non-string payload");
    }
}
