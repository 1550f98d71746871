//! Colors and state-dependent color mappings.

use crate::error::PathButtonError;
use crate::state::StateSet;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGBA8 color value.
///
/// Serialized as `#RRGGBB` or `#AARRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ButtonColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ButtonColor {
    pub const TRANSPARENT: ButtonColor = ButtonColor::new(0, 0, 0, 0);
    pub const BLACK: ButtonColor = ButtonColor::new(0, 0, 0, 255);
    pub const WHITE: ButtonColor = ButtonColor::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color from a packed `0xAARRGGBB` integer.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` integer.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Check if the color is fully transparent.
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => None,
        }
    }
}

impl Default for ButtonColor {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Debug for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:08x}", self.to_argb())
        }
    }
}

impl TryFrom<String> for ButtonColor {
    type Error = PathButtonError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or(PathButtonError::InvalidColor(s))
    }
}

impl From<ButtonColor> for String {
    fn from(color: ButtonColor) -> Self {
        color.to_string()
    }
}

impl From<Color> for ButtonColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<ButtonColor> for Color {
    fn from(color: ButtonColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Condition of a color rule: all `when` flags set, no `unless` flag set.
///
/// A matcher with both sets empty matches every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateMatcher {
    #[serde(default)]
    pub when: StateSet,
    #[serde(default)]
    pub unless: StateSet,
}

impl StateMatcher {
    /// Match every state.
    pub const fn any() -> Self {
        Self {
            when: StateSet::NORMAL,
            unless: StateSet::NORMAL,
        }
    }

    /// Match states that contain all of `states`.
    pub const fn when(states: StateSet) -> Self {
        Self {
            when: states,
            unless: StateSet::NORMAL,
        }
    }

    /// Additionally require that none of `states` is set.
    pub fn unless(mut self, states: StateSet) -> Self {
        self.unless |= states;
        self
    }

    pub fn matches(&self, state: StateSet) -> bool {
        state.contains(self.when) && !state.intersects(self.unless)
    }

    fn relevant(&self) -> StateSet {
        self.when | self.unless
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ColorRule {
    #[serde(flatten)]
    matcher: StateMatcher,
    color: ButtonColor,
}

#[derive(Serialize, Deserialize)]
struct ColorMappingDef {
    #[serde(default)]
    rules: Vec<ColorRule>,
    default: ButtonColor,
}

/// An ordered list of `(matcher, color)` rules with a fallback color.
///
/// Whether the mapping resolves to more than one color is computed once at
/// construction; hosts use it to skip work on state changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ColorMappingDef", into = "ColorMappingDef")]
pub struct ColorMapping {
    rules: Vec<ColorRule>,
    default: ButtonColor,
    state_dependent: bool,
}

impl ColorMapping {
    /// A mapping that resolves to `color` in every state.
    pub fn constant(color: ButtonColor) -> Self {
        Self {
            rules: Vec::new(),
            default: color,
            state_dependent: false,
        }
    }

    /// Create a mapping from ordered rules and a fallback color.
    pub fn new(
        rules: impl IntoIterator<Item = (StateMatcher, ButtonColor)>,
        default: ButtonColor,
    ) -> Self {
        let rules = rules
            .into_iter()
            .map(|(matcher, color)| ColorRule { matcher, color })
            .collect();
        Self::from_parts(rules, default)
    }

    /// Start building a mapping with the given fallback color.
    pub fn builder(default: ButtonColor) -> ColorMappingBuilder {
        ColorMappingBuilder {
            rules: Vec::new(),
            default,
        }
    }

    fn from_parts(rules: Vec<ColorRule>, default: ButtonColor) -> Self {
        let mut mapping = Self {
            rules,
            default,
            state_dependent: false,
        };
        mapping.state_dependent = mapping.compute_state_dependent();
        mapping
    }

    /// Resolve the color for `state`: the first matching rule, else the default.
    pub fn resolve(&self, state: StateSet) -> ButtonColor {
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(state))
            .map(|rule| rule.color)
            .unwrap_or(self.default)
    }

    /// Whether different states can resolve to different colors.
    pub fn is_state_dependent(&self) -> bool {
        self.state_dependent
    }

    /// The fallback color.
    pub fn default_color(&self) -> ButtonColor {
        self.default
    }

    /// Number of rules (excluding the fallback).
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn compute_state_dependent(&self) -> bool {
        // Resolution only depends on the flags some rule mentions.
        let relevant = self
            .rules
            .iter()
            .fold(StateSet::NORMAL, |acc, rule| acc | rule.matcher.relevant());
        let mut subsets = relevant.subsets();
        let Some(first) = subsets.next().map(|state| self.resolve(state)) else {
            return false;
        };
        subsets.any(|state| self.resolve(state) != first)
    }
}

impl Default for ColorMapping {
    fn default() -> Self {
        Self::constant(ButtonColor::TRANSPARENT)
    }
}

impl From<ButtonColor> for ColorMapping {
    fn from(color: ButtonColor) -> Self {
        Self::constant(color)
    }
}

impl From<ColorMappingDef> for ColorMapping {
    fn from(def: ColorMappingDef) -> Self {
        Self::from_parts(def.rules, def.default)
    }
}

impl From<ColorMapping> for ColorMappingDef {
    fn from(mapping: ColorMapping) -> Self {
        Self {
            rules: mapping.rules,
            default: mapping.default,
        }
    }
}

/// Builder for [`ColorMapping`].
pub struct ColorMappingBuilder {
    rules: Vec<ColorRule>,
    default: ButtonColor,
}

impl ColorMappingBuilder {
    /// Append a rule. Rules are tried in insertion order.
    pub fn rule(mut self, matcher: StateMatcher, color: ButtonColor) -> Self {
        self.rules.push(ColorRule { matcher, color });
        self
    }

    /// Shorthand for a rule matching states that contain `states`.
    pub fn when(self, states: StateSet, color: ButtonColor) -> Self {
        self.rule(StateMatcher::when(states), color)
    }

    pub fn build(self) -> ColorMapping {
        ColorMapping::from_parts(self.rules, self.default)
    }
}
