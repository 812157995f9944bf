//! Interactive line editing for the EML REPL.
//!
//! Raw-mode input with history navigation; nothing here touches the
//! parser.

mod history;
mod input;

pub use history::CommandHistory;
pub use input::read_line_with_history;
