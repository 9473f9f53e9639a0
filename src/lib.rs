//! # Pathwright - Conversational Pathway Synthesis Engine
//!
//! **Pathwright** turns a short natural-language description of a desired
//! phone/voice-agent workflow into a fully-wired directed graph ("pathway")
//! of typed conversation nodes and labeled conditional edges, ready to hand
//! to an external conversational-voice execution platform.
//!
//! The engine is purely local: classification, node construction, and graph
//! assembly are synchronous string/struct manipulation with no I/O. Talking
//! to the remote pathway service that persists the finished graph is the
//! caller's job.
//!
//! ## Core Workflow
//!
//! 1. **Classify**: a keyword-table classifier maps the description to a
//!    domain, a purpose, and a priority-ordered list of concepts
//!    (sub-intents).
//! 2. **Assemble**: the assembler fans a start hub out to one specialized
//!    node per concept and per configured webhook/knowledge-base/transfer
//!    integration, then converges every branch on a shared resolution node
//!    and a single End Call terminal.
//! 3. **Validate**: every finished pathway passes the structural invariant
//!    check (unique ids, one start node, valid edge endpoints, a terminal,
//!    reachability) before it is returned.
//!
//! Fixed-topology templates (sales qualification, multi-specialist support,
//! appointment booking, generic workflow) are available in
//! [`templates`] for callers that want a known shape instead of
//! classification.
//!
//! ## Quick Start
//!
//! ```rust
//! use pathwright::prelude::*;
//!
//! fn main() -> Result<(), PathwayError> {
//!     let options = AssembleOptions::default();
//!     let assembled = assemble(
//!         "Family Insurance Line",
//!         "Help families find affordable insurance coverage, urgent requests first",
//!         &options,
//!     )?;
//!
//!     // The urgent-assistance concept sorts ahead of everything else.
//!     let pathway = &assembled.pathway;
//!     assert!(pathway.start_node().is_some());
//!     assert!(assembled.summary.all_wired());
//!
//!     // Serialize into the JSON shape the remote pathway service expects.
//!     let wire = pathway.to_wire_json().expect("pathway serializes");
//!     assert!(wire["nodes"].is_array());
//!     Ok(())
//! }
//! ```

pub mod assembler;
pub mod build;
pub mod error;
pub mod intent;
pub mod pathway;
pub mod prelude;
pub mod templates;
