//! Fixed-topology pathway templates.
//!
//! Unlike the assembler, these never consult the classifier: each hard-codes
//! its own topology and is parameterized only by structured caller input.
//! All four share the node-shape invariants of assembled pathways, expose
//! their always-available interrupts as global nodes, and end in exactly one
//! End Call terminal. Branching logic is encoded purely in edge labels for
//! the downstream execution engine to interpret.

pub mod appointment;
pub mod sales;
pub mod support;
pub mod workflow;

pub use appointment::{AppointmentConfig, appointment_pathway};
pub use sales::{SalesConfig, sales_pathway};
pub use support::{SupportConfig, support_pathway};
pub use workflow::{WorkflowConfig, WorkflowStep, workflow_pathway};
