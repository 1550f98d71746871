//! Interaction state definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A single interaction condition of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateFlag {
    /// Pointer or key is held down on the widget.
    Pressed,
    /// Widget has keyboard focus.
    Focused,
    /// Pointer is over the widget.
    Hovered,
    /// Widget is toggled on/selected.
    Selected,
    /// Widget does not accept input.
    Disabled,
}

impl StateFlag {
    /// All flags, in bit order.
    pub const ALL: [StateFlag; 5] = [
        StateFlag::Pressed,
        StateFlag::Focused,
        StateFlag::Hovered,
        StateFlag::Selected,
        StateFlag::Disabled,
    ];

    const fn bit(self) -> u8 {
        match self {
            StateFlag::Pressed => 1 << 0,
            StateFlag::Focused => 1 << 1,
            StateFlag::Hovered => 1 << 2,
            StateFlag::Selected => 1 << 3,
            StateFlag::Disabled => 1 << 4,
        }
    }
}

/// The set of simultaneous interaction conditions of a widget.
///
/// The empty set is the "normal" state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<StateFlag>", into = "Vec<StateFlag>")]
pub struct StateSet(u8);

impl StateSet {
    pub const NORMAL: StateSet = StateSet(0);
    pub const PRESSED: StateSet = StateSet(StateFlag::Pressed.bit());
    pub const FOCUSED: StateSet = StateSet(StateFlag::Focused.bit());
    pub const HOVERED: StateSet = StateSet(StateFlag::Hovered.bit());
    pub const SELECTED: StateSet = StateSet(StateFlag::Selected.bit());
    pub const DISABLED: StateSet = StateSet(StateFlag::Disabled.bit());

    /// Check whether every flag in `other` is set.
    pub const fn contains(self, other: StateSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether any flag in `other` is set.
    pub const fn intersects(self, other: StateSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Check if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set or clear the flags in `other`.
    pub fn set(&mut self, other: StateSet, on: bool) {
        if on {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }

    /// Return a copy with the flags in `other` set or cleared.
    pub fn with(mut self, other: StateSet, on: bool) -> Self {
        self.set(other, on);
        self
    }

    /// Iterate over the flags that are set.
    pub fn flags(self) -> impl Iterator<Item = StateFlag> {
        StateFlag::ALL
            .into_iter()
            .filter(move |flag| self.0 & flag.bit() != 0)
    }

    /// Every subset of this set, including the empty set and the set itself.
    pub fn subsets(self) -> impl Iterator<Item = StateSet> {
        let mask = self.0;
        // Submask enumeration, ending with the empty set.
        let mut next = Some(mask);
        std::iter::from_fn(move || {
            let current = next?;
            next = if current == 0 {
                None
            } else {
                Some((current - 1) & mask)
            };
            Some(StateSet(current))
        })
    }
}

impl From<StateFlag> for StateSet {
    fn from(flag: StateFlag) -> Self {
        StateSet(flag.bit())
    }
}

impl From<Vec<StateFlag>> for StateSet {
    fn from(flags: Vec<StateFlag>) -> Self {
        flags.into_iter().fold(StateSet::NORMAL, |set, flag| set | flag.into())
    }
}

impl From<StateSet> for Vec<StateFlag> {
    fn from(set: StateSet) -> Self {
        set.flags().collect()
    }
}

impl BitOr for StateSet {
    type Output = StateSet;

    fn bitor(self, rhs: StateSet) -> StateSet {
        StateSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for StateSet {
    fn bitor_assign(&mut self, rhs: StateSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("StateSet(normal)");
        }
        f.debug_set().entries(self.flags()).finish()
    }
}
