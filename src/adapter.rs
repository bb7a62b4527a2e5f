//! Adapter Pattern
//!
//! Lets objects with incompatible interfaces collaborate by placing a wrapper
//! in front of the adaptee. Three adapters are shown: two one-way adapters and
//! a two-way adapter that holds one adaptee per capability.

use crate::console::Console;

// ============================================================================
// Capabilities
// ============================================================================

pub trait UkPlug {
    fn uk_plug(&self, out: &mut dyn Console);
}

pub trait EuPlug {
    fn eu_plug(&self, out: &mut dyn Console);
}

// Borrowed adaptees work everywhere an owned one does, so one plug can sit
// behind several adapters at once.
impl<T: UkPlug + ?Sized> UkPlug for &T {
    fn uk_plug(&self, out: &mut dyn Console) {
        (**self).uk_plug(out);
    }
}

impl<T: EuPlug + ?Sized> EuPlug for &T {
    fn eu_plug(&self, out: &mut dyn Console) {
        (**self).eu_plug(out);
    }
}

// ============================================================================
// Adaptees
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct BritishPlug;

impl UkPlug for BritishPlug {
    fn uk_plug(&self, out: &mut dyn Console) {
        out.say("🔌I am a UK plug🔌");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EuropeanPlug;

impl EuPlug for EuropeanPlug {
    fn eu_plug(&self, out: &mut dyn Console) {
        out.say("🔌I am an EU plug🔌");
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Serves an EU socket from the UK side.
#[derive(Debug, Clone)]
pub struct UkEuAdapter<E> {
    adaptee: E,
}

impl<E: EuPlug> UkEuAdapter<E> {
    pub fn new(adaptee: E) -> Self {
        Self { adaptee }
    }
}

impl<E: EuPlug> EuPlug for UkEuAdapter<E> {
    fn eu_plug(&self, out: &mut dyn Console) {
        out.say("I am in UkEuAdapter");
        self.adaptee.eu_plug(out);
    }
}

/// Serves a UK socket from the EU side.
#[derive(Debug, Clone)]
pub struct EuUkAdapter<U> {
    adaptee: U,
}

impl<U: UkPlug> EuUkAdapter<U> {
    pub fn new(adaptee: U) -> Self {
        Self { adaptee }
    }
}

impl<U: UkPlug> UkPlug for EuUkAdapter<U> {
    fn uk_plug(&self, out: &mut dyn Console) {
        out.say("I am in EuUkAdapter");
        self.adaptee.uk_plug(out);
    }
}

/// Exposes both capabilities, routing each to the adaptee that owns it.
#[derive(Debug, Clone)]
pub struct TwoWayPlugAdapter<U, E> {
    uk: U,
    eu: E,
}

impl<U: UkPlug, E: EuPlug> TwoWayPlugAdapter<U, E> {
    pub fn new(uk: U, eu: E) -> Self {
        Self { uk, eu }
    }
}

impl<U: UkPlug, E: EuPlug> UkPlug for TwoWayPlugAdapter<U, E> {
    fn uk_plug(&self, out: &mut dyn Console) {
        out.say("I am in the UK side of TwoWayPlugAdapter");
        self.uk.uk_plug(out);
    }
}

impl<U: UkPlug, E: EuPlug> EuPlug for TwoWayPlugAdapter<U, E> {
    fn eu_plug(&self, out: &mut dyn Console) {
        out.say("I am in the EU side of TwoWayPlugAdapter");
        self.eu.eu_plug(out);
    }
}

pub fn charge_from_uk_socket(plug: &dyn UkPlug, out: &mut dyn Console) {
    plug.uk_plug(out);
}

pub fn charge_from_eu_socket(plug: &dyn EuPlug, out: &mut dyn Console) {
    plug.eu_plug(out);
}

// ============================================================================
// Demo
// ============================================================================

pub fn demo(out: &mut dyn Console) {
    let uk = BritishPlug;
    let eu = EuropeanPlug;

    let uk_eu = UkEuAdapter::new(&eu);
    let eu_uk = EuUkAdapter::new(&uk);
    let two_way = TwoWayPlugAdapter::new(&uk, &eu);

    out.say("One-way adapters:");
    charge_from_eu_socket(&uk_eu, out);
    charge_from_uk_socket(&eu_uk, out);

    out.blank();
    out.say("Two-way adapter:");
    charge_from_uk_socket(&two_way, out);
    charge_from_eu_socket(&two_way, out);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_one_way_adapter_delegates_after_announcing() {
        let mut out = Transcript::new();
        UkEuAdapter::new(EuropeanPlug).eu_plug(&mut out);
        assert_eq!(out.lines(), ["I am in UkEuAdapter", "🔌I am an EU plug🔌"]);
    }

    #[test]
    fn test_adapter_ends_like_direct_call() {
        let mut direct = Transcript::new();
        BritishPlug.uk_plug(&mut direct);

        let mut adapted = Transcript::new();
        EuUkAdapter::new(BritishPlug).uk_plug(&mut adapted);

        assert_eq!(adapted.last(), direct.last());
    }

    #[test]
    fn test_two_way_adapter_routes_by_capability() {
        let adapter = TwoWayPlugAdapter::new(BritishPlug, EuropeanPlug);

        let mut out = Transcript::new();
        adapter.uk_plug(&mut out);
        assert_eq!(out.last(), Some("🔌I am a UK plug🔌"));

        out.clear();
        adapter.eu_plug(&mut out);
        assert_eq!(out.last(), Some("🔌I am an EU plug🔌"));
    }

    #[test]
    fn test_adapters_can_nest() {
        let nested = UkEuAdapter::new(UkEuAdapter::new(EuropeanPlug));
        let mut out = Transcript::new();
        nested.eu_plug(&mut out);
        assert_eq!(out.lines().len(), 3);
    }

    #[test]
    fn test_demo_narrates_every_adapter() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert!(out.contains("UkEuAdapter"));
        assert!(out.contains("EuUkAdapter"));
        assert!(out.contains("UK side of TwoWayPlugAdapter"));
        assert!(out.contains("EU side of TwoWayPlugAdapter"));
    }
}
