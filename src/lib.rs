//! Normalizes heterogeneous Meta Ads campaign exports (XLSX or CSV) into a
//! single ordered report: each row is classified into an objective, its
//! cost-per-result is derived from whichever columns the export variant
//! carries, and the sequence is sorted by date, campaign lineage, and type.

pub mod export;
pub mod grid;
pub mod report;
