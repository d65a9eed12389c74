use serde::Serialize;

/// A non-empty `font-family` fallback list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FontStack(Vec<String>);

impl FontStack {
    /// Returns `None` for an empty list.
    pub fn new<I, S>(families: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let families: Vec<String> = families.into_iter().map(Into::into).collect();
        (!families.is_empty()).then_some(Self(families))
    }

    pub fn families(&self) -> &[String] {
        &self.0
    }

    /// Render as a `font-family` value, quoting names that contain spaces.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|family| {
                let quoted = family.starts_with('"') || family.starts_with('\'');
                if !quoted && family.contains(char::is_whitespace) {
                    format!("\"{family}\"")
                } else {
                    family.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
