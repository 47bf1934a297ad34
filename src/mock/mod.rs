mod display;
mod script;
mod terminal;

pub use display::{DisplayError, TerminalDisplay, render_board};
pub use script::{ScriptError, ScriptedMoves};
pub use terminal::run_interactive_terminal;
