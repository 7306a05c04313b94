//! Reducers, group-by accumulation, and rankings.
//!
//! Every operation here takes a pre-filtered slice and returns scalars or
//! small tables for direct display. Empty input always yields zero/empty
//! output, never an error.

pub mod service;


pub use service::{
    BreakdownSlice, GroupTotal, OrderedGroups, breakdown, group_totals, mean, ratio_percent,
    sorted_desc, sum, top_n,
};
