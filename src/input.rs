//! Line input shared between the session loop and interactive prompts.

use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock};
use std::rc::Rc;

/// A cloneable handle to one buffered line source.
///
/// The session loop and the phone index prompt both read from the same
/// terminal; sharing a single buffer keeps either side from swallowing
/// lines meant for the other.
pub struct SharedInput<R> {
    inner: Rc<RefCell<R>>,
}

impl SharedInput<StdinLock<'static>> {
    /// Handle over the locked process stdin.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> SharedInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: Rc::new(RefCell::new(reader)),
        }
    }

    /// Read one line into `buf`. Returns `Ok(0)` at end of input.
    pub fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        self.inner.borrow_mut().read_line(buf)
    }
}

impl<R> Clone for SharedInput<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}
