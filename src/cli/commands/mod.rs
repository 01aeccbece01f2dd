pub mod check;
mod command_result;
pub mod fix;
pub mod format;
mod helper;

pub use command_result::*;
