//! Harvest module - growth-stage lookup and the side-effect pipeline.
//!
//! - **Growth**: [`lookup_growth_property`] resolves a crop's maturity, reporting
//!   a [`GrowthFault`] for blocks without a usable integer property
//! - **Pipeline**: [`HarvestPlan`] computes drops and the reset state, then commits them

pub mod growth;
pub mod pipeline;

// Re-export commonly used types
pub use growth::{lookup_growth_property, GrowthFault, GrowthProperty, AGE_PROPERTY};

pub use pipeline::{remove_one_seed, HarvestPlan, HarvestStats};
