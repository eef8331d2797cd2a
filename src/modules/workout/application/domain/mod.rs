pub mod entities;
pub mod pagination;
