//! Inspector pane rendering modules
//!
//! # Pane Modules
//!
//! - [`locals`]: Declared locals with types, addresses, values and sizes
//! - [`bytes`]: Hex dump of the selected local's bytes
//! - [`output`]: The captured demonstration output
//! - [`status`]: Status bar with keybindings and selection state
//! - `utils`: Shared helpers for borders and hex dumps
//!
//! Each pane module exports a primary `render_*` function.

mod utils;

pub mod bytes;
pub mod locals;
pub mod output;
pub mod status;

pub use bytes::render_bytes_pane;
pub use locals::render_locals_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;
pub use utils::hex_dump_lines;
