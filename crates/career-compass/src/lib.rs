//! Career assessment engine.
//!
//! The [`assessment`] module holds the scoring core: career registry, question bank,
//! answer scoring with badge tracking, ranking with a sudden-death tie-break, and the
//! orchestrator that drives one run. The remaining modules carry the ambient concerns
//! and the collaborators that render, archive, and deliver finished results.

pub mod assessment;
pub mod config;
pub mod error;
pub mod history;
pub mod mailer;
pub mod report;
pub mod telemetry;
