pub mod markdown;
pub mod terminal;

pub use markdown::markdown_to_lines;
pub use terminal::strip_ansi_codes;
