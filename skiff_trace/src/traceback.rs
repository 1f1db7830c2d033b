//! Contains types recording the call sites an exception passes while the interpreter
//! unwinds.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Records one call site captured during stack unwinding.
///
/// A frame names the function or procedure that was active, the line number within it, and
/// optionally the source file it came from. Frames are immutable once constructed; there is
/// nothing to validate and no operation on them can fail.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TraceFrame {
    function: Box<str>,
    line: u32,
    filename: Option<Arc<str>>,
}

impl TraceFrame {
    /// The placeholder shown in rendered diagnostics for frames with no known source file.
    pub const UNKNOWN_FILENAME: &'static str = "<unknown>";

    /// Creates a frame with no source filename.
    pub fn new<F: Into<Box<str>>>(function: F, line: u32) -> Self {
        Self {
            function: function.into(),
            line,
            filename: None,
        }
    }

    /// Creates a frame with an explicit source filename.
    pub fn with_filename<F: Into<Box<str>>, P: Into<Arc<str>>>(function: F, line: u32, filename: P) -> Self {
        Self {
            function: function.into(),
            line,
            filename: Some(filename.into()),
        }
    }

    /// The name of the function or procedure active at this call site.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// The line number within the function, 1-based by convention.
    ///
    /// A value of `0` conventionally means the line is unknown; it is stored and rendered
    /// as-is rather than being rejected.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The source file for this frame, or `None` if it was left unspecified.
    #[inline]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// The filename handle inherited by a frame recorded directly after this one.
    pub(crate) fn inherited_filename(&self) -> Option<Arc<str>> {
        self.filename.clone()
    }
}

/// Renders the frame as a single diagnostic line, substituting
/// [`UNKNOWN_FILENAME`](TraceFrame::UNKNOWN_FILENAME) when no source file was recorded.
impl Display for TraceFrame {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "  in {} ({}:{})",
            self.function,
            self.filename().unwrap_or(Self::UNKNOWN_FILENAME),
            self.line
        )
    }
}

/// The ordered sequence of call sites accumulated by one exception while it unwinds.
///
/// Frames are appended in the order unwinding visits them: the first frame is the innermost
/// call site, closest to the original failure, and every later frame is a progressively
/// outer caller. The sequence only ever grows. There is no upper bound on its length; how
/// many frames are recorded is up to the interpreter and naturally limited by its call
/// stack depth.
///
/// A traceback is owned exclusively by the exception that carries it and is never shared
/// between exceptions.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Traceback {
    frames: Vec<TraceFrame>,
}

impl Traceback {
    /// Creates an empty traceback.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Appends a frame after all previously appended frames.
    pub fn push(&mut self, frame: TraceFrame) {
        self.frames.push(frame);
    }

    /// The recorded frames, innermost call site first.
    #[inline]
    pub fn frames(&self) -> &[TraceFrame] {
        &self.frames
    }

    /// The number of recorded frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The most recently appended frame, which is the outermost call site recorded so far.
    #[inline]
    pub fn last(&self) -> Option<&TraceFrame> {
        self.frames.last()
    }

    /// Returns an iterator over the frames, yielding the innermost call site first.
    pub fn iter_frames(&self) -> impl ExactSizeIterator<Item = &TraceFrame> {
        self.frames.iter()
    }
}

/// Renders one line per frame, innermost call site first, with no header or trailing
/// newline. An empty traceback renders as nothing at all.
impl Display for Traceback {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut frames = self.frames.iter();
        if let Some(first) = frames.next() {
            Display::fmt(first, f)?;
            for frame in frames {
                write!(f, "\n{}", frame)?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Traceback {
    type Item = &'a TraceFrame;
    type IntoIter = std::slice::Iter<'a, TraceFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
