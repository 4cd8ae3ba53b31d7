pub mod adaptors;
pub mod source;
