pub mod sign;
pub mod path;
pub mod errors;

pub use sign::*;
pub use path::*;
pub use errors::*;
