//! Core trash workflow: the batch processor and the content store it drives

pub mod batch;
pub mod store;
