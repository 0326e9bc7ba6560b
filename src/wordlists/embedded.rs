//! Embedded dictionary
//!
//! Generated by `build.rs` from `data/words.txt`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
