pub mod file;
pub mod traits;

pub use file::FileDateSpecSource;
pub use traits::{DateSpecSource, EmptySource};
