/// Help-markup formatter: block parsing, emphasis, wrapping, indentation, titles.
pub mod block;
pub mod emphasis;
pub mod indent;
pub mod styles;
pub mod title;
pub mod wrap;

pub use block::{BlockParser, Flavor, emph, plain};
pub use emphasis::emphasize;
pub use indent::indent;
pub use styles::Styles;
pub use title::top_title;
pub use wrap::wrap;
