pub mod background;
pub mod interactive;
