mod seat;
mod slot;
mod user;

pub use seat::*;
pub use slot::*;
pub use user::*;
