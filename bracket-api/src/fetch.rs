//! The state of an asynchronous fetch.

use crate::{Error, Result};

/// The state of a fetch of `T` from the server.
///
/// `FetchData` keeps "not loaded yet" distinguishable from "loaded and
/// empty": a pending fetch is [`Pending`], a completed one is [`Ready`] even
/// when the value is an empty list.
///
/// [`Pending`]: FetchData::Pending
/// [`Ready`]: FetchData::Ready
#[derive(Debug, Default)]
pub enum FetchData<T> {
    /// The request has not completed yet.
    #[default]
    Pending,
    /// The request completed successfully.
    Ready(T),
    /// The request failed.
    Failed(Error),
}

impl<T> FetchData<T> {
    /// Returns `true` if the fetch completed successfully.
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns the fetched value, or `None` while it is not available.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> FetchData<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Pending => FetchData::Pending,
            Self::Ready(value) => FetchData::Ready(f(value)),
            Self::Failed(err) => FetchData::Failed(err),
        }
    }
}

impl<T> From<Result<T>> for FetchData<T> {
    fn from(res: Result<T>) -> Self {
        match res {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}
