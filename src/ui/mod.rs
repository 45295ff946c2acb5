pub mod json;
pub mod output;
pub mod text;
pub mod theme;
