//! Row-source abstraction and scoped resource release.
//!
//! A [`RowSource`] is an open connection that can run a query and hand back
//! a [`RowCursor`]. Both must be closed; [`CloseGuard`] makes sure that
//! happens exactly once, either through an explicit `close()` on the happy
//! path or from `Drop` when an error unwinds the pipeline.

use crate::error::Result;
use std::ops::{Deref, DerefMut};

/// A resource that must be released.
pub trait Close {
    fn close(&mut self) -> Result<()>;
}

/// Cursor over the rows of an executed query, with values rendered as text.
pub trait RowCursor: Close {
    /// Column names in result order.
    fn column_names(&self) -> &[String];

    /// Next row, or `None` when exhausted.
    fn next_row(&mut self) -> Result<Option<Vec<String>>>;
}

/// An open data-source connection.
pub trait RowSource: Close {
    type Cursor: RowCursor;

    fn execute(&mut self, query: &str) -> Result<Self::Cursor>;
}

/// Owns a resource and closes it exactly once.
pub struct CloseGuard<T: Close> {
    inner: T,
    resource: &'static str,
    closed: bool,
}

impl<T: Close> CloseGuard<T> {
    /// Wrap `inner`; `resource` names it in diagnostics.
    pub fn new(inner: T, resource: &'static str) -> Self {
        CloseGuard {
            inner,
            resource,
            closed: false,
        }
    }

    /// Close now and report the outcome. `Drop` will not close again,
    /// even if this fails.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.inner.close()
    }
}

impl<T: Close> Deref for CloseGuard<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Close> DerefMut for CloseGuard<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Close> Drop for CloseGuard<T> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.inner.close() {
            tracing::warn!(resource = self.resource, error = %e, "close failed while unwinding");
        }
    }
}
