pub mod conf;
pub mod pkg;
pub mod prelude;
