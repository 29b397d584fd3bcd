/// Errors returned for invalid index arguments.
///
/// These signal a programming error in the caller and are never recovered internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("start index {start} must not come after stop index {stop}")]
    InvalidRange { start: usize, stop: usize },
    #[error("index {index} is out of bounds for {count} items")]
    IndexOutOfBounds { index: usize, count: usize },
}

pub(crate) fn validate_indexes(count: usize, start: usize, stop: usize) -> Result<(), Error> {
    if start > stop {
        return Err(Error::InvalidRange { start, stop });
    }
    if stop >= count {
        return Err(Error::IndexOutOfBounds { index: stop, count });
    }
    Ok(())
}
