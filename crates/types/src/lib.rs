pub mod color;
pub mod page;

pub use color::Color;
pub use page::PageSize;
