//! Library for reporting runtime failures in embedded Skiff interpreters.
//!
//! When Skiff code fails, the host raises an [`Exception`] at the failure site and each
//! interpreter frame unwinding toward the handler appends its call site to the exception's
//! [`Traceback`]. The handler that catches the exception can then inspect the recorded
//! route frame by frame or [`render`](Exception::render) it as text.

pub mod exception;
pub mod metadata;
pub mod traceback;

pub use exception::Exception;
pub use metadata::Metadata;
pub use traceback::{TraceFrame, Traceback};
