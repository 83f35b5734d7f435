use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A font, identified by the name the drawing surface knows it under.
///
/// The style layer never loads or inspects font data; measuring and drawing
/// text in a given font is the surface's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Font(Cow<'static, str>);

impl Font {
    pub const HELVETICA: Font = Font(Cow::Borrowed("Helvetica"));
    pub const HELVETICA_BOLD: Font = Font(Cow::Borrowed("Helvetica-Bold"));
    pub const TIMES_ROMAN: Font = Font(Cow::Borrowed("Times-Roman"));
    pub const COURIER: Font = Font(Cow::Borrowed("Courier"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Font {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Font {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
