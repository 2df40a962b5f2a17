use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MAC_ADDR: Color = Color::BrightYellow;
pub const GOOD: Color = Color::Green;
pub const BAD: Color = Color::Red;
pub const NOTICE: Color = Color::Yellow;
