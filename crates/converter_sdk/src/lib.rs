mod flvto;
mod headers;
mod savenow;
mod ytid;

pub use flvto::*;
pub use headers::*;
pub use savenow::*;
pub use ytid::*;
