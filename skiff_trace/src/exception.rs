//! Contains the exception value raised when Skiff code fails at runtime.

use crate::metadata::Metadata;
use crate::traceback::{TraceFrame, Traceback};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A runtime failure travelling outward through the interpreter's call frames.
///
/// An exception is created at the failure site with an empty [`Traceback`]. Each enclosing
/// frame the interpreter unwinds through records its own call site with
/// [`add_frame`](Self::add_frame) or
/// [`add_frame_with_filename`](Self::add_frame_with_filename) before re-raising, and keeps
/// propagating the same instance, so the handler that eventually catches the exception can
/// read or render the complete route from the failure to itself. Once caught, the trace is
/// considered closed: handlers read, they do not append.
///
/// An exception is made to be created and mutated along a single unwinding path. It is
/// `Send`, so a multi-threaded host can raise on any thread, but one instance must never be
/// appended to from two unwinding paths at once; each thread's failure owns its own
/// exception.
///
/// None of the operations here can fail. The exception's existence is the failure; recording
/// where it travelled is infallible bookkeeping.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub struct Exception {
    name: Box<str>,
    reason: Box<str>,
    user_info: Option<Metadata>,
    traceback: Traceback,
}

impl Exception {
    /// Creates an exception with an empty traceback and no metadata.
    ///
    /// `name` is the categorical identifier for the kind of failure (a Skiff exception
    /// class name such as `"RuntimeError"`); `reason` is the human-readable explanation.
    pub fn new<N: Into<Box<str>>, R: Into<Box<str>>>(name: N, reason: R) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            user_info: None,
            traceback: Traceback::new(),
        }
    }

    /// Creates an exception carrying a structured diagnostic payload.
    ///
    /// The payload is stored and handed to the catch site unchanged; nothing in between
    /// reads it. This is also the only moment metadata can be attached: after construction,
    /// appending frames is the sole way an exception changes.
    pub fn with_user_info<N: Into<Box<str>>, R: Into<Box<str>>>(name: N, reason: R, user_info: Metadata) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            user_info: Some(user_info),
            traceback: Traceback::new(),
        }
    }

    /// The categorical identifier for this kind of failure.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable explanation of what went wrong.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The diagnostic payload attached at construction, if any.
    #[inline]
    pub fn user_info(&self) -> Option<&Metadata> {
        self.user_info.as_ref()
    }

    /// The call sites recorded so far, innermost first.
    #[inline]
    pub fn traceback(&self) -> &Traceback {
        &self.traceback
    }

    /// Records the call site of a frame the interpreter is unwinding through.
    ///
    /// The new frame's filename is inherited from the most recently recorded frame, so a
    /// run of calls within one source file only needs the filename stated once. If no frame
    /// has been recorded yet, or the previous frame has no filename, the new frame has none
    /// either.
    ///
    /// Returns the receiver, so an unwinding frame can decorate and hand on the same
    /// instance in one expression; appends never copy the exception.
    pub fn add_frame<F: Into<Box<str>>>(&mut self, function: F, line: u32) -> &mut Self {
        let filename = self.traceback.last().and_then(TraceFrame::inherited_filename);
        self.push_frame(function.into(), line, filename)
    }

    /// Records a call site with an explicit source filename.
    ///
    /// The filename overrides whatever would have been inherited, and becomes what later
    /// [`add_frame`](Self::add_frame) calls inherit.
    pub fn add_frame_with_filename<F: Into<Box<str>>, P: Into<Arc<str>>>(
        &mut self,
        function: F,
        line: u32,
        filename: P,
    ) -> &mut Self {
        self.push_frame(function.into(), line, Some(filename.into()))
    }

    fn push_frame(&mut self, function: Box<str>, line: u32, filename: Option<Arc<str>>) -> &mut Self {
        self.traceback.push(match filename {
            Some(filename) => TraceFrame::with_filename(function, line, filename),
            None => TraceFrame::new(function, line),
        });
        self
    }

    /// Returns the compact one-line `name: reason` form of the exception.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.name, self.reason)
    }

    /// Renders the full diagnostic: the reason, then one line per recorded call site in
    /// the order unwinding visited them.
    ///
    /// Equivalent to formatting the exception with `{}`. Rendering is deterministic and
    /// infallible: missing filenames appear as
    /// [`TraceFrame::UNKNOWN_FILENAME`] rather than erroring, and rendering twice without
    /// appending frames in between produces identical strings.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Renders the diagnostic for the eventual handler: the first line is the reason, each
/// following line one recorded call site, innermost first. The exception's `name` is not
/// part of the rendered text; it is available through [`Exception::name`] and
/// [`Exception::summary`].
impl Display for Exception {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.reason)?;
        if !self.traceback.is_empty() {
            write!(f, "\n{}", self.traceback)?;
        }
        Ok(())
    }
}
