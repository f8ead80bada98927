pub mod concerns;
pub mod info;
pub mod users;
