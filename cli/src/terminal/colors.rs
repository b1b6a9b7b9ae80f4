use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const ACCENT: Color = Color::Cyan;
pub const ONLINE: Color = Color::Green;
pub const OFFLINE: Color = Color::Red;
pub const ERROR: Color = Color::Yellow;
