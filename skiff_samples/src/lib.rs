//! Contains sample Skiff runtime failures.

use skiff_trace::{Exception, Metadata};

/// Produces the exception raised by a division by zero, with the call sites a small
/// calculation records while unwinding and the operands attached as a payload.
///
/// # Examples
///
/// ```
/// let raised = skiff_samples::division_by_zero();
///
/// assert_eq!(raised.summary(), "RuntimeError: division by zero");
/// assert_eq!(raised.traceback().len(), 2);
/// assert_eq!(raised.traceback().frames()[1].filename(), Some("math.skf"));
/// ```
pub fn division_by_zero() -> Exception {
    let mut user_info = Metadata::new();
    user_info.insert("dividend", 1i64);
    user_info.insert("divisor", 0i64);

    let mut raised = Exception::with_user_info("RuntimeError", "division by zero", user_info);
    raised.add_frame_with_filename("divide", 10, "math.skf");
    raised.add_frame("compute", 42);
    raised
}

/// Produces an exception whose frames were recorded without source filenames, as happens
/// when the host feeds the interpreter code that never came from a file.
///
/// # Examples
///
/// ```
/// use skiff_trace::TraceFrame;
///
/// let raised = skiff_samples::missing_source_names();
///
/// assert!(raised.render().contains(TraceFrame::UNKNOWN_FILENAME));
/// ```
pub fn missing_source_names() -> Exception {
    let mut raised = Exception::new("NameError", "undefined symbol 'anchor'");
    raised.add_frame("lookup", 7);
    raised.add_frame("evaluate", 19);
    raised
}

/// Produces the exception left behind by a runaway recursion: `depth` copies of the same
/// self-call site, with the filename stated once and inherited by every later frame.
///
/// # Examples
///
/// ```
/// let raised = skiff_samples::deep_recursion(100);
///
/// assert_eq!(raised.traceback().len(), 100);
/// assert_eq!(raised.traceback().frames()[99].filename(), Some("recurse.skf"));
/// assert_eq!(raised.render().lines().count(), 101);
/// ```
pub fn deep_recursion(depth: u32) -> Exception {
    let mut raised = Exception::new("RecursionError", "call depth exceeded");
    if depth > 0 {
        raised.add_frame_with_filename("recurse", 9, "recurse.skf");
        for _ in 1..depth {
            raised.add_frame("recurse", 9);
        }
    }
    raised
}
