mod product;
mod upload;

pub use product::*;
pub use upload::*;
