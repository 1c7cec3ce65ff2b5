// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define the core
// concepts of the system.
//
// Rules for this layer:
//   - NO backend types allowed here (no pyo3, no Python)
//   - NO file I/O or network calls
//   - Only data definitions and the seam trait
//
// This layer defines what things ARE — a token, a tag, a parse
// result — not how the external model produces them.

// An annotated token and the coarse part-of-speech tagset
pub mod token;

// The three-bucket output of a parse
pub mod parse_result;

// The narrow interface to the external linguistic model
pub mod traits;
