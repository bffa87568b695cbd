//! This module contains the generators for the two variable-length codes.

pub mod exp_golomb;
pub mod golomb;
