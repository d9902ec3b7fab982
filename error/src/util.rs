use crate::{Error, ErrorKind};

/// Compare the kind of an error result
///
/// Used for testing only
pub fn assert_error_kind<T: std::fmt::Debug>(result: Result<T, Error>, kind: ErrorKind) {
    match result {
        Ok(value) => panic!("expect error {kind}, got Ok({value:?})"),
        Err(err) => assert_eq!(err.kind(), kind, "unexpected error: {err}"),
    }
}
