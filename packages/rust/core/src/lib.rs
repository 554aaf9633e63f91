//! Document assembly for CareerDocs.
//!
//! This crate turns an [`ApplicantProfile`](careerdocs_shared::ApplicantProfile)
//! into a résumé and a cover letter and writes both into a timestamped run
//! folder (see [`pipeline::generate`]).

pub mod cover_letter;
pub mod pipeline;
pub mod resume;
pub mod sections;
