pub mod columns;
pub mod filter;
pub mod partial_update;
pub mod pool;
pub mod value;
