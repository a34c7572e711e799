//! Embedded dictionaries
//!
//! Generated by the build script from `data/primary.txt` and
//! `data/extended.txt`, sorted and deduplicated.

include!(concat!(env!("OUT_DIR"), "/primary.rs"));
include!(concat!(env!("OUT_DIR"), "/extended.rs"));
