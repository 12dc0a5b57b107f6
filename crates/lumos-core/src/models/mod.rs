pub mod configuration;
pub mod field;
pub mod font;
pub mod scale;
pub mod theme;
