//! Style descriptor data model.
//!
//! A descriptor maps breakpoints to state bundles, and state bundles map
//! pseudo-class states (plus the optional `dark` slot) to style values:
//!
//! ```text
//! {
//!   base: { static: 'flex', hover: { 'bg-blue-600': isPrimary }, dark: { static: 'bg-gray-800' } },
//!   md:   { static: 'flex-row' },
//! }
//! ```
//!
//! Descriptors can be built directly in Rust, deserialized from JSON, or lowered
//! from the loose value tree produced by the static evaluator. All three forms
//! go through [`Descriptor::from_value`] semantics, so they resolve identically.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Prefix emitted for the `dark` color-scheme slot.
pub const DARK_PREFIX: &str = "dark:";

/// Key of the color-scheme slot inside a state bundle.
pub const DARK_KEY: &str = "dark";

/// Responsive breakpoint tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    /// `2xl` (not a valid identifier, so always addressed as a string key)
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Class prefix for this breakpoint. `base` has none.
    pub fn prefix(self) -> &'static str {
        match self {
            Breakpoint::Base => "",
            Breakpoint::Sm => "sm:",
            Breakpoint::Md => "md:",
            Breakpoint::Lg => "lg:",
            Breakpoint::Xl => "xl:",
            Breakpoint::Xxl => "2xl:",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.key() == key)
    }
}

/// Pseudo-class state, or the unconditional `static` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    Static,
    Hover,
    Focus,
    Active,
    Visited,
    Target,
    First,
    Last,
    Only,
    Odd,
    Even,
    Empty,
    Disabled,
    Enabled,
    Checked,
    Indeterminate,
    Default,
    Required,
    Valid,
    Invalid,
    Autofill,
}

impl State {
    pub const ALL: [State; 21] = [
        State::Static,
        State::Hover,
        State::Focus,
        State::Active,
        State::Visited,
        State::Target,
        State::First,
        State::Last,
        State::Only,
        State::Odd,
        State::Even,
        State::Empty,
        State::Disabled,
        State::Enabled,
        State::Checked,
        State::Indeterminate,
        State::Default,
        State::Required,
        State::Valid,
        State::Invalid,
        State::Autofill,
    ];

    pub fn key(self) -> &'static str {
        match self {
            State::Static => "static",
            State::Hover => "hover",
            State::Focus => "focus",
            State::Active => "active",
            State::Visited => "visited",
            State::Target => "target",
            State::First => "first",
            State::Last => "last",
            State::Only => "only",
            State::Odd => "odd",
            State::Even => "even",
            State::Empty => "empty",
            State::Disabled => "disabled",
            State::Enabled => "enabled",
            State::Checked => "checked",
            State::Indeterminate => "indeterminate",
            State::Default => "default",
            State::Required => "required",
            State::Valid => "valid",
            State::Invalid => "invalid",
            State::Autofill => "autofill",
        }
    }

    /// Class prefix for this state. `static` has none.
    pub fn prefix(self) -> &'static str {
        match self {
            State::Static => "",
            State::Hover => "hover:",
            State::Focus => "focus:",
            State::Active => "active:",
            State::Visited => "visited:",
            State::Target => "target:",
            State::First => "first:",
            State::Last => "last:",
            State::Only => "only:",
            State::Odd => "odd:",
            State::Even => "even:",
            State::Empty => "empty:",
            State::Disabled => "disabled:",
            State::Enabled => "enabled:",
            State::Checked => "checked:",
            State::Indeterminate => "indeterminate:",
            State::Default => "default:",
            State::Required => "required:",
            State::Valid => "valid:",
            State::Invalid => "invalid:",
            State::Autofill => "autofill:",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.key() == key)
    }
}

/// A style value: either a literal class list or a map of conditional classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    /// `'px-4 py-2'`
    Classes(String),
    /// `{ 'px-4 py-2': true, 'hidden': isHidden }`
    ///
    /// Keys are kept as declared; a key may hold several space-separated classes.
    Conditional(Vec<(String, bool)>),
}

impl Style {
    pub fn conditional<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        Style::Conditional(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Iterate over the individual class tokens this style selects.
    pub fn tokens(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Style::Classes(classes) => Box::new(classes.split_whitespace()),
            Style::Conditional(entries) => Box::new(
                entries
                    .iter()
                    .filter(|(_, enabled)| *enabled)
                    .flat_map(|(classes, _)| classes.split_whitespace()),
            ),
        }
    }

    /// Lower a loose value into a style.
    ///
    /// Strings become class lists and objects become conditional maps whose
    /// conditions follow JavaScript truthiness. Anything else is not a style.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(classes) => Some(Style::Classes(classes.clone())),
            Value::Object(map) => Some(Style::Conditional(
                map.iter().map(|(k, v)| (k.clone(), is_truthy(v))).collect(),
            )),
            _ => None,
        }
    }
}

impl From<&str> for Style {
    fn from(classes: &str) -> Self {
        Style::Classes(classes.to_string())
    }
}

impl From<String> for Style {
    fn from(classes: String) -> Self {
        Style::Classes(classes)
    }
}

/// The `dark` slot of a state bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dark {
    /// `dark: 'bg-gray-900'` or `dark: { 'bg-gray-900': isDark }`
    Style(Style),
    /// `dark: { static: 'bg-gray-900', hover: 'bg-gray-800' }`
    States(Vec<(State, Style)>),
}

impl Dark {
    /// An object is read as a nested state bundle when at least one of its keys
    /// names a state; otherwise it is a conditional class map.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => Style::from_value(value).map(Dark::Style),
            Value::Object(map) if map.keys().any(|k| State::from_key(k).is_some()) => {
                Some(Dark::States(
                    map.iter()
                        .filter_map(|(k, v)| Some((State::from_key(k)?, Style::from_value(v)?)))
                        .collect(),
                ))
            }
            Value::Object(_) => Style::from_value(value).map(Dark::Style),
            _ => None,
        }
    }
}

/// One entry of a state bundle, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    State(State, Style),
    Dark(Dark),
}

/// State bundle for a single breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaStyles {
    variants: Vec<Variant>,
}

impl MediaStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: State, style: impl Into<Style>) -> Self {
        self.variants.push(Variant::State(state, style.into()));
        self
    }

    pub fn dark(mut self, dark: Dark) -> Self {
        self.variants.push(Variant::Dark(dark));
        self
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Lower a loose object into a state bundle, skipping unknown keys and
    /// values that are not styles.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let variants = map
            .iter()
            .filter_map(|(key, value)| {
                if key == DARK_KEY {
                    Dark::from_value(value).map(Variant::Dark)
                } else {
                    let state = State::from_key(key)?;
                    Style::from_value(value).map(|style| Variant::State(state, style))
                }
            })
            .collect();
        Some(Self { variants })
    }
}

/// A complete style descriptor: breakpoints in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    media: Vec<(Breakpoint, MediaStyles)>,
}

impl Descriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn media(mut self, breakpoint: Breakpoint, styles: MediaStyles) -> Self {
        self.media.push((breakpoint, styles));
        self
    }

    pub fn breakpoints(&self) -> &[(Breakpoint, MediaStyles)] {
        &self.media
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    /// Lower a loose value tree into a descriptor.
    ///
    /// Only recognized breakpoint, state and `dark` keys are visited. Non-object
    /// input yields an empty descriptor.
    pub fn from_value(value: &Value) -> Self {
        let media = value
            .as_object()
            .map(|map| {
                map.iter()
                    .filter_map(|(key, value)| {
                        Some((Breakpoint::from_key(key)?, MediaStyles::from_value(value)?))
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { media }
    }
}

impl<'de> Deserialize<'de> for Descriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Descriptor::from_value(&value))
    }
}

/// JavaScript truthiness of a loose value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
