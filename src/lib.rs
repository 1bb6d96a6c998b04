//! Garden Advisor - seasonal gardening advice on the command line
//!
//! The [`core`] module holds the static advice tables and the total lookup
//! functions; everything else is the CLI wrapped around them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

// Re-export core types and functions for easier use
pub use crate::core::{
    data::{PlantType, Season, advice_for, plants_for},
    resolver::{
        AdviceReport, AdviceResolver, DEFAULT_RECOMMENDATION_LIMIT, get_advice, normalize,
        recommend_plants,
    },
};

