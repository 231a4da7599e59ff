// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard modifier mask carried alongside every gesture event.

bitflags::bitflags! {
    /// Held keyboard modifiers, packed into the low four bits.
    ///
    /// Derived fresh from each raw input event and never stored past that
    /// event's processing; gesture events copy the mask so consumers can gate
    /// their reaction on it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key held.
        const SHIFT = 0b0000_0001;
        /// Control key held.
        const CTRL  = 0b0000_0010;
        /// Alt/Option key held.
        const ALT   = 0b0000_0100;
        /// Meta/Command key held.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Pack four modifier booleans into a mask.
    pub fn from_flags(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        let mut mask = Self::empty();
        if shift {
            mask |= Self::SHIFT;
        }
        if ctrl {
            mask |= Self::CTRL;
        }
        if alt {
            mask |= Self::ALT;
        }
        if meta {
            mask |= Self::META;
        }
        mask
    }

    /// Returns true when the held modifiers are exactly one of the single
    /// modifiers in `allowed`.
    ///
    /// This is the chord test used by the mouse-pan and wheel-zoom gates:
    /// with `allowed = CTRL | META`, a bare Ctrl or a bare Meta qualifies,
    /// while Ctrl+Shift, Ctrl+Meta, or no modifier at all do not.
    pub fn is_one_of(self, allowed: Self) -> bool {
        self.bits().count_ones() == 1 && allowed.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flags_packs_bits() {
        assert_eq!(Modifiers::from_flags(false, false, false, false).bits(), 0);
        assert_eq!(
            Modifiers::from_flags(true, false, false, false),
            Modifiers::SHIFT
        );
        assert_eq!(
            Modifiers::from_flags(false, true, false, true),
            Modifiers::CTRL | Modifiers::META
        );
        assert_eq!(Modifiers::from_flags(true, true, true, true).bits(), 0b1111);
    }

    // A bare qualifying modifier passes; combinations and empty masks do not.
    #[test]
    fn one_of_requires_exactly_one_allowed_bit() {
        let allowed = Modifiers::CTRL | Modifiers::META;
        assert!(Modifiers::CTRL.is_one_of(allowed));
        assert!(Modifiers::META.is_one_of(allowed));
        assert!(!Modifiers::empty().is_one_of(allowed));
        assert!(!Modifiers::SHIFT.is_one_of(allowed));
        assert!(!(Modifiers::CTRL | Modifiers::META).is_one_of(allowed));
        assert!(!(Modifiers::CTRL | Modifiers::SHIFT).is_one_of(allowed));
    }
}
