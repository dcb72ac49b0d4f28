pub mod telegram;
pub mod vehicle;

pub use telegram::*;
pub use vehicle::*;
