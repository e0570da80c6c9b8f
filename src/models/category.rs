/// The closed set of expense categories.
///
/// Declaration order is the display order: totals, grouped views and chart
/// bars are all laid out in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Housing,
    Transportation,
    Education,
    Entertainment,
    Shopping,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Education => "Education",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Housing,
            Self::Transportation,
            Self::Education,
            Self::Entertainment,
            Self::Shopping,
            Self::Other,
        ]
    }

    /// Exact lookup, as used for fields read back from the log.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == name)
    }

    /// Lenient lookup for typed input: ignores case and surrounding space.
    pub fn parse(input: &str) -> Option<Self> {
        let lower = input.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == lower)
    }

    /// Comma-separated list of names for prompts and error messages.
    pub fn names() -> String {
        Self::all()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
