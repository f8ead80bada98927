pub use serve::*;

mod cors;
mod info;
mod serve;
mod users;
