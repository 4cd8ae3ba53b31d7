pub mod board;
pub mod internal;
