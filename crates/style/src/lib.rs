pub mod border;
pub mod font;
pub mod resolve;
pub mod text;

pub use border::{BorderWidths, Side};
pub use font::Font;
pub use resolve::{resolve, resolve_or, resolve_required, BaseStyle, ResolvedStyle, StyleChain, StyleLayer};
pub use text::HorizontalAlignment;
