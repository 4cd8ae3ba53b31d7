pub mod ordering;
pub mod posted;
pub mod selectors;
pub mod spec;
pub mod store;
