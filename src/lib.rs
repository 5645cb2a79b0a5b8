//! # Introduction
//!
//! primsize prints the values and in-memory sizes of primitive data types:
//! `int`, `float`, `double`, `bool`, `char`, `long long`, `short` and a string.
//! Each value is declared once from a literal, then printed with its size.
//! An optional terminal UI built with [ratatui](https://docs.rs/ratatui) shows
//! where each value sits in a virtual stack frame and what its bytes look like.
//!
//! ## Pipeline
//!
//! ```text
//! Literals → Frame → Sections → Console → stdout
//!                  ↘ Inspector
//! ```
//!
//! 1. [`types`] — the demonstrated primitive types and their sizes.
//! 2. [`memory`] — tagged [`memory::value::Value`]s laid out in a
//!    [`memory::frame::Frame`].
//! 3. [`demo`] — declares the locals and prints one section per type.
//! 4. [`formatting`] — value, precision and size-line formatting.
//! 5. [`console`] — captured output, flushed to stdout by the binary.
//! 6. [`ui`] — ratatui-based inspector; not part of the stable library API.

pub mod config;
pub mod console;
pub mod constants;
pub mod demo;
pub mod errors;
pub mod formatting;
pub mod memory;
pub mod types;
pub mod ui;
