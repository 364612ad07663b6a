//! Reference page widgets: section navigator and documentation body

pub mod body;
mod navigator;

pub use body::DocBody;
pub use navigator::Navigator;
