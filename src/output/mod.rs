// src/output/mod.rs
// =============================================================================
// Turning records into text and putting that text somewhere.
//
// Submodules:
// - format: table and list renderers
// - sink: stdout or file
// - console: fallible stdout writes for progress lines and results
// =============================================================================

mod console;
mod format;
mod sink;

pub use console::Console;
pub use format::render;
pub use sink::OutputSink;
