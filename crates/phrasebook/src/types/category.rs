use serde::Serialize;

/// One translation key's content for the active language.
///
/// `slots[i]` describes the placeholder written as `{i}` or `{i:spec}` in
/// `phrase`. Slots are addressed by their explicit index, so indices that never
/// appear in the phrase are `None`.
///
/// # Example
///
/// ```
/// use phrasebook::{Category, FormatSlot};
///
/// let category = Category::new("Hello {1:t}, {0}!", vec![
///     Some(FormatSlot::argument()),
///     Some(FormatSlot::new("t")),
/// ]);
///
/// assert!(category.has_slots());
/// assert_eq!(category.slots[1].as_ref().map(|s| s.placeholder(1)), Some("{1:t}".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Raw phrase text, empty when the catalog has no line for the language.
    pub phrase: String,

    /// Placeholders found in `phrase`, indexed by their written position.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Option<FormatSlot>>,
}

impl Category {
    pub fn new(phrase: impl Into<String>, slots: Vec<Option<FormatSlot>>) -> Self {
        Self {
            phrase: phrase.into(),
            slots,
        }
    }

    /// A category with no phrase for the active language.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if at least one slot is present and needs resolving.
    pub fn has_slots(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }
}

/// The spec part of a `{index:spec}` placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormatSlot {
    /// Text after the colon, empty for a bare `{index}`.
    pub raw: String,
}

/// How a slot is filled in at format time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind<'a> {
    /// `{i}`: the next argument, printed as-is.
    Argument,
    /// `{i:t}`: the next argument names a category to expand.
    Translate,
    /// `{i:some.key}`: expands the named category without consuming an argument.
    Category(&'a str),
    /// A single-character spec other than `t`.
    Invalid(char),
}

impl FormatSlot {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// A bare positional slot.
    pub fn argument() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> SlotKind<'_> {
        let mut chars = self.raw.chars();
        match (chars.next(), chars.next()) {
            (None, _) => SlotKind::Argument,
            (Some('t' | 'T'), None) => SlotKind::Translate,
            (Some(c), None) => SlotKind::Invalid(c),
            (Some(_), Some(_)) => SlotKind::Category(&self.raw),
        }
    }

    /// The literal token this slot was written as at `index`.
    pub fn placeholder(&self, index: usize) -> String {
        if self.raw.is_empty() {
            format!("{{{index}}}")
        } else {
            format!("{{{index}:{}}}", self.raw)
        }
    }
}
