//! Diagnostics - user-readable messages

mod caret;
mod diagnostic;
mod emitter;

pub use self::{
    caret::Caret,
    diagnostic::Diagnostic,
    emitter::{emit, emit_to_stderr},
};
