//! Card resolution: the pipeline and the reports it produces.
//!
//! Resolution is synchronous and uninterruptible. Presentation happens
//! afterwards from the returned `ResolutionReport`.

mod pipeline;
mod report;

pub use pipeline::CardResolver;
pub use report::{
    AppliedEffect, AppliedStatus, ReportEntry, ResolutionReport, SkipReason, SkippedSpec,
    SpecSection,
};
