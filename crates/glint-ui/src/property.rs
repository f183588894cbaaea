use std::collections::BTreeMap;
use std::fmt;

use glint_engine::coords::{ColorRgba, Rect, Vec2};

// ── Keys and values ───────────────────────────────────────────────────────

/// Every attribute a panel or element can carry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PropertyKey {
    Position,
    Size,
    BackgroundColor,
    BorderColor,
    BorderWidth,
    CornerRadius,
    FontFamily,
    FontSize,
    FontColor,
    FontWidth,
    FontBlur,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 11] = [
        PropertyKey::Position,
        PropertyKey::Size,
        PropertyKey::BackgroundColor,
        PropertyKey::BorderColor,
        PropertyKey::BorderWidth,
        PropertyKey::CornerRadius,
        PropertyKey::FontFamily,
        PropertyKey::FontSize,
        PropertyKey::FontColor,
        PropertyKey::FontWidth,
        PropertyKey::FontBlur,
    ];

    /// The value kind stored under this key.
    pub fn kind(self) -> PropertyKind {
        match self {
            PropertyKey::Position | PropertyKey::Size => PropertyKind::Vec2,
            PropertyKey::BackgroundColor | PropertyKey::BorderColor | PropertyKey::FontColor => {
                PropertyKind::Color
            }
            PropertyKey::BorderWidth
            | PropertyKey::CornerRadius
            | PropertyKey::FontSize
            | PropertyKey::FontWidth
            | PropertyKey::FontBlur => PropertyKind::Float,
            PropertyKey::FontFamily => PropertyKind::Text,
        }
    }

    /// Value a freshly created store holds for this key.
    pub fn default_value(self) -> PropertyValue {
        match self {
            PropertyKey::Position | PropertyKey::Size => PropertyValue::Vec2(Vec2::zero()),
            PropertyKey::BackgroundColor | PropertyKey::BorderColor => {
                PropertyValue::Color(ColorRgba::transparent())
            }
            PropertyKey::FontColor => PropertyValue::Color(ColorRgba::black()),
            PropertyKey::BorderWidth | PropertyKey::CornerRadius => PropertyValue::Float(0.0),
            PropertyKey::FontSize => PropertyValue::Float(16.0),
            PropertyKey::FontWidth => PropertyValue::Float(0.4),
            PropertyKey::FontBlur => PropertyValue::Float(0.15),
            PropertyKey::FontFamily => PropertyValue::Text(DEFAULT_FONT_FAMILY.to_owned()),
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKey::Position => "position",
            PropertyKey::Size => "size",
            PropertyKey::BackgroundColor => "background-color",
            PropertyKey::BorderColor => "border-color",
            PropertyKey::BorderWidth => "border-width",
            PropertyKey::CornerRadius => "corner-radius",
            PropertyKey::FontFamily => "font-family",
            PropertyKey::FontSize => "font-size",
            PropertyKey::FontColor => "font-color",
            PropertyKey::FontWidth => "font-width",
            PropertyKey::FontBlur => "font-blur",
        };
        f.write_str(name)
    }
}

/// Family name used until a store is given a real one.
pub const DEFAULT_FONT_FAMILY: &str = "default";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PropertyKind {
    Vec2,
    Color,
    Float,
    Text,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKind::Vec2 => "vec2",
            PropertyKind::Color => "color",
            PropertyKind::Float => "float",
            PropertyKind::Text => "text",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Vec2(Vec2),
    Color(ColorRgba),
    Float(f32),
    Text(String),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Vec2(_) => PropertyKind::Vec2,
            PropertyValue::Color(_) => PropertyKind::Color,
            PropertyValue::Float(_) => PropertyKind::Float,
            PropertyValue::Text(_) => PropertyKind::Text,
        }
    }
}

impl From<Vec2> for PropertyValue {
    fn from(v: Vec2) -> Self {
        PropertyValue::Vec2(v)
    }
}

impl From<ColorRgba> for PropertyValue {
    fn from(c: ColorRgba) -> Self {
        PropertyValue::Color(c)
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_owned())
    }
}

/// Rust types that can be read out of a [`PropertyValue`].
pub trait PropertyType: Sized {
    const KIND: PropertyKind;

    fn from_value(value: &PropertyValue) -> Option<Self>;
}

impl PropertyType for Vec2 {
    const KIND: PropertyKind = PropertyKind::Vec2;

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Vec2(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for ColorRgba {
    const KIND: PropertyKind = PropertyKind::Color;

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Color(c) => Some(*c),
            _ => None,
        }
    }
}

impl PropertyType for f32 {
    const KIND: PropertyKind = PropertyKind::Float;

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for String {
    const KIND: PropertyKind = PropertyKind::Text;

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// No value has been stored under the key.
    Missing(PropertyKey),
    /// The stored (or offered) value is not of the kind the key requires.
    TypeMismatch {
        key: PropertyKey,
        expected: PropertyKind,
        found: PropertyKind,
    },
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::Missing(key) => write!(f, "property `{key}` is not set"),
            PropertyError::TypeMismatch { key, expected, found } => {
                write!(f, "property `{key}`: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for PropertyError {}

// ── Store ─────────────────────────────────────────────────────────────────

/// Called after every successful write, whether or not the value changed.
pub type ChangeListener = Box<dyn FnMut(PropertyKey, &PropertyValue)>;

/// Key/value attribute store with a single change listener.
///
/// Writes are validated against [`PropertyKey::kind`], so a key always holds
/// a value of the expected kind and typed reads only fail for missing keys.
///
/// ```rust,ignore
/// let mut props = Properties::new();
/// props.set_size(640.0, 480.0).set_position(50.0, 100.0).set_corner_radius(10.0);
/// assert_eq!(props.get::<Vec2>(PropertyKey::Size)?, Vec2::new(640.0, 480.0));
/// ```
pub struct Properties {
    values: BTreeMap<PropertyKey, PropertyValue>,
    listener: Option<ChangeListener>,
}

impl Default for Properties {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Properties")
            .field("values", &self.values)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl Properties {
    /// Store seeded with [`PropertyKey::default_value`] for every key.
    pub fn new() -> Self {
        let values = PropertyKey::ALL.iter().map(|&k| (k, k.default_value())).collect();
        Self { values, listener: None }
    }

    /// Store with no keys at all.
    pub fn empty() -> Self {
        Self { values: BTreeMap::new(), listener: None }
    }

    /// Replaces the change listener. Seeded defaults are not replayed.
    pub fn set_listener(&mut self, listener: impl FnMut(PropertyKey, &PropertyValue) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn contains(&self, key: PropertyKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn raw(&self, key: PropertyKey) -> Option<&PropertyValue> {
        self.values.get(&key)
    }

    /// Typed read.
    pub fn get<T: PropertyType>(&self, key: PropertyKey) -> Result<T, PropertyError> {
        let value = self.values.get(&key).ok_or(PropertyError::Missing(key))?;
        T::from_value(value).ok_or(PropertyError::TypeMismatch {
            key,
            expected: T::KIND,
            found: value.kind(),
        })
    }

    /// Stores `value` under `key` and notifies the listener.
    ///
    /// Fails without storing anything when the value kind does not match
    /// the key.
    pub fn set(
        &mut self,
        key: PropertyKey,
        value: impl Into<PropertyValue>,
    ) -> Result<&mut Self, PropertyError> {
        let value = value.into();
        let expected = key.kind();
        if value.kind() != expected {
            return Err(PropertyError::TypeMismatch { key, expected, found: value.kind() });
        }
        Ok(self.store(key, value))
    }

    fn store(&mut self, key: PropertyKey, value: PropertyValue) -> &mut Self {
        self.values.insert(key, value);
        if let (Some(listener), Some(stored)) = (self.listener.as_mut(), self.values.get(&key)) {
            listener(key, stored);
        }
        self
    }

    fn or_default<T: PropertyType + Default>(&self, key: PropertyKey) -> T {
        self.get(key).unwrap_or_default()
    }

    // ── typed writers ──

    pub fn set_position(&mut self, x: f32, y: f32) -> &mut Self {
        self.store(PropertyKey::Position, PropertyValue::Vec2(Vec2::new(x, y)))
    }

    pub fn set_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.store(PropertyKey::Size, PropertyValue::Vec2(Vec2::new(width, height)))
    }

    pub fn set_background_color(&mut self, color: ColorRgba) -> &mut Self {
        self.store(PropertyKey::BackgroundColor, PropertyValue::Color(color))
    }

    pub fn set_border_color(&mut self, color: ColorRgba) -> &mut Self {
        self.store(PropertyKey::BorderColor, PropertyValue::Color(color))
    }

    pub fn set_border_width(&mut self, width: f32) -> &mut Self {
        self.store(PropertyKey::BorderWidth, PropertyValue::Float(width))
    }

    pub fn set_corner_radius(&mut self, radius: f32) -> &mut Self {
        self.store(PropertyKey::CornerRadius, PropertyValue::Float(radius))
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) -> &mut Self {
        self.store(PropertyKey::FontFamily, PropertyValue::Text(family.into()))
    }

    pub fn set_font_size(&mut self, size: f32) -> &mut Self {
        self.store(PropertyKey::FontSize, PropertyValue::Float(size))
    }

    pub fn set_font_color(&mut self, color: ColorRgba) -> &mut Self {
        self.store(PropertyKey::FontColor, PropertyValue::Color(color))
    }

    pub fn set_font_width(&mut self, width: f32) -> &mut Self {
        self.store(PropertyKey::FontWidth, PropertyValue::Float(width))
    }

    pub fn set_font_blur(&mut self, blur: f32) -> &mut Self {
        self.store(PropertyKey::FontBlur, PropertyValue::Float(blur))
    }

    // ── typed readers (fall back to the kind's zero value when unset) ──

    pub fn position(&self) -> Vec2 {
        self.or_default(PropertyKey::Position)
    }

    pub fn size(&self) -> Vec2 {
        self.or_default(PropertyKey::Size)
    }

    /// `position` and `size` as a rectangle in the owner's coordinate space.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }

    pub fn background_color(&self) -> ColorRgba {
        self.or_default(PropertyKey::BackgroundColor)
    }

    pub fn border_color(&self) -> ColorRgba {
        self.or_default(PropertyKey::BorderColor)
    }

    pub fn border_width(&self) -> f32 {
        self.or_default(PropertyKey::BorderWidth)
    }

    pub fn corner_radius(&self) -> f32 {
        self.or_default(PropertyKey::CornerRadius)
    }

    pub fn font_family(&self) -> String {
        self.or_default(PropertyKey::FontFamily)
    }

    pub fn font_size(&self) -> f32 {
        self.or_default(PropertyKey::FontSize)
    }

    pub fn font_color(&self) -> ColorRgba {
        self.or_default(PropertyKey::FontColor)
    }

    pub fn font_width(&self) -> f32 {
        self.or_default(PropertyKey::FontWidth)
    }

    pub fn font_blur(&self) -> f32 {
        self.or_default(PropertyKey::FontBlur)
    }
}
