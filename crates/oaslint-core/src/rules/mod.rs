//! Flat rule modules that operate over pre-collected document slices
//!
//! Unlike the walker, these modules do not react to arbitrary positions:
//! each gathers the subtrees it cares about from a handful of known
//! locations and scans them exhaustively.
//!
//! Copyright (c) 2026 Oaslint Team
//! Licensed under the Apache-2.0 license

pub mod responses;
pub mod schemas;
