pub use environment::*;

mod environment;
