pub mod format;

pub use format::duration_readable;
pub use format::hours_readable;
