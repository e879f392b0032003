mod adhoc;
mod duplicate_field_name;
mod duplicate_join_alias;
mod duplicate_tag;
mod invalid_field_reference;
mod invalid_foreign_key_reference;
mod missing_required_attribute;
mod name_override_conflict;

use adhoc::AdhocError;
use duplicate_field_name::DuplicateFieldName;
use duplicate_join_alias::DuplicateJoinAlias;
use duplicate_tag::DuplicateTag;
use invalid_field_reference::InvalidFieldReference;
use invalid_foreign_key_reference::InvalidForeignKeyReference;
use missing_required_attribute::MissingRequiredAttribute;
use name_override_conflict::NameOverrideConflict;
use std::sync::Arc;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// A configuration error raised while building an entity's field metadata.
///
/// Errors are cheap to clone: clones share the same allocation. The registry
/// relies on this to replay the exact error captured by a failed build to
/// every later caller (see [`Error::ptr_eq`]).
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    assert!(
                        inner.cause.is_none(),
                        "consequent error must not already have a cause"
                    );
                    inner.kind
                }
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Returns `true` if both values are handles to the same captured error.
    pub fn ptr_eq(&self, other: &Error) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// The identifier of the field, join, or entity the root cause is about.
    pub fn subject(&self) -> Option<&str> {
        match self.root().kind() {
            ErrorKind::MissingRequiredAttribute(err) => Some(err.subject()),
            ErrorKind::NameOverrideConflict(err) => Some(err.subject()),
            ErrorKind::DuplicateFieldName(err) => Some(err.subject()),
            ErrorKind::DuplicateJoinAlias(err) => Some(err.subject()),
            ErrorKind::InvalidForeignKeyReference(err) => Some(err.subject()),
            ErrorKind::InvalidFieldReference(err) => Some(err.subject()),
            ErrorKind::DuplicateTag(err) => Some(err.subject()),
            ErrorKind::Adhoc(_) | ErrorKind::Unknown => None,
        }
    }

    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.inner.as_ref().and_then(|inner| inner.cause.as_ref()) {
            err = cause;
        }
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns the kind of the root cause. Predicates such as
    /// [`Error::is_duplicate_join_alias`] look through context.
    fn root_kind(&self) -> &ErrorKind {
        self.root().kind()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .as_ref()
            .and_then(|inner| inner.cause.as_ref())
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    MissingRequiredAttribute(MissingRequiredAttribute),
    NameOverrideConflict(NameOverrideConflict),
    DuplicateFieldName(DuplicateFieldName),
    DuplicateJoinAlias(DuplicateJoinAlias),
    InvalidForeignKeyReference(InvalidForeignKeyReference),
    InvalidFieldReference(InvalidFieldReference),
    DuplicateTag(DuplicateTag),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            MissingRequiredAttribute(err) => core::fmt::Display::fmt(err, f),
            NameOverrideConflict(err) => core::fmt::Display::fmt(err, f),
            DuplicateFieldName(err) => core::fmt::Display::fmt(err, f),
            DuplicateJoinAlias(err) => core::fmt::Display::fmt(err, f),
            InvalidForeignKeyReference(err) => core::fmt::Display::fmt(err, f),
            InvalidFieldReference(err) => core::fmt::Display::fmt(err, f),
            DuplicateTag(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown rowmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
