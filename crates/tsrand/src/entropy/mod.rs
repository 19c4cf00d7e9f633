mod fallback;
mod interface;
mod os;

pub use fallback::*;
pub use interface::*;
pub use os::*;
