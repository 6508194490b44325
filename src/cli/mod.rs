pub mod decode;
pub mod encode;
pub mod ttb2txt;
pub mod txt2ttb;
pub mod types;

pub use decode::*;
pub use encode::*;
pub use ttb2txt::*;
pub use txt2ttb::*;
pub use types::*;
