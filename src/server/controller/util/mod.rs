pub mod csrf;
pub mod gate;
