mod cats;
mod system;


pub use cats::*;
pub use system::*;
