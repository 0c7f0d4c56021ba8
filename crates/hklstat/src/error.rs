// We follow the same approach as everywhere else in this workspace: a public
// opaque `Error` wrapping a private `ErrorKind`, with one small struct per
// kind of failure.
//
// Note that mismatched array lengths are NOT represented here. Those are
// bugs in the calling code, and we panic immediately.

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The underlying internal error type
#[non_exhaustive]
#[derive(Clone, Debug)]
enum ErrorKind {
    /// An error that occurs when an array of Miller indices doesn't have
    /// exactly 3 columns
    IndexArrayShape(IndexArrayShapeError),
    /// An error that occurs when an unknown sigma-method name is specified
    SigmaMethod(SigmaMethodError),
}

// define constructor methods for Error
impl Error {
    /// produce an error indicating that an array of Miller indices has the
    /// wrong shape
    pub(crate) fn index_array_shape(actual_shape: Vec<usize>) -> Self {
        Error {
            kind: ErrorKind::IndexArrayShape(IndexArrayShapeError { actual_shape }),
        }
    }

    /// produce an error indicating that an unknown sigma-method name was
    /// specified
    pub(crate) fn sigma_method(actual: String, choices: Vec<String>) -> Self {
        Error {
            kind: ErrorKind::SigmaMethod(SigmaMethodError { actual, choices }),
        }
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ErrorKind {}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            ErrorKind::IndexArrayShape(ref err) => err.fmt(f),
            ErrorKind::SigmaMethod(ref err) => err.fmt(f),
        }
    }
}

/// An error that occurs when an array of Miller indices doesn't have the
/// shape `(n, 3)`
#[derive(Clone, Debug)]
struct IndexArrayShapeError {
    actual_shape: Vec<usize>,
}

impl std::error::Error for IndexArrayShapeError {}

impl core::fmt::Display for IndexArrayShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "an array of Miller indices must have the shape (n, 3), not {:?}",
            self.actual_shape
        )
    }
}

/// An error that occurs when an unknown sigma-method name is specified
#[derive(Clone, Debug)]
struct SigmaMethodError {
    actual: String,
    choices: Vec<String>,
}

impl std::error::Error for SigmaMethodError {}

impl core::fmt::Display for SigmaMethodError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "Unknown sigma calculation method: \"{}\". Choices include: {:?}",
            self.actual, self.choices
        )
    }
}
