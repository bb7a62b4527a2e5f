//! Bridge Pattern
//!
//! Splits the remote (abstraction) from the device (implementation) so both
//! sides can grow independently. A [`Remote`] borrows any [`Device`]
//! exclusively; the device outlives the remote and keeps its state after the
//! remote is dropped.

use crate::console::Console;

/// Upper bound for volume and channel. Remotes stop at the bounds instead of
/// wrapping.
pub const MAX_LEVEL: u8 = 100;

// ============================================================================
// Capabilities
// ============================================================================

pub trait RemoteControl {
    fn toggle_power(&mut self, out: &mut dyn Console);
    fn volume_down(&mut self, out: &mut dyn Console);
    fn volume_up(&mut self, out: &mut dyn Console);
    fn channel_down(&mut self, out: &mut dyn Console);
    fn channel_up(&mut self, out: &mut dyn Console);
    fn mute(&mut self, out: &mut dyn Console);
}

pub trait Device {
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> u8;
    fn set_volume(&mut self, volume: u8);
    fn channel(&self) -> u8;
    fn set_channel(&mut self, channel: u8);
}

// ============================================================================
// Devices
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeviceState {
    pub enabled: bool,
    pub volume: u8,
    pub channel: u8,
}

macro_rules! impl_device {
    ($($device:ident),+ $(,)?) => {
        $(
            impl $device {
                pub fn new() -> Self {
                    Self::default()
                }

                pub fn state(&self) -> DeviceState {
                    self.state
                }
            }

            impl Device for $device {
                fn is_enabled(&self) -> bool {
                    self.state.enabled
                }

                fn enable(&mut self) {
                    if !self.is_enabled() {
                        self.state.enabled = true;
                    }
                }

                fn disable(&mut self) {
                    if self.is_enabled() {
                        self.state.enabled = false;
                    }
                }

                fn volume(&self) -> u8 {
                    self.state.volume
                }

                fn set_volume(&mut self, volume: u8) {
                    self.state.volume = volume;
                }

                fn channel(&self) -> u8 {
                    self.state.channel
                }

                fn set_channel(&mut self, channel: u8) {
                    self.state.channel = channel;
                }
            }
        )+
    };
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Radio {
    state: DeviceState,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tv {
    state: DeviceState,
}

impl_device!(Radio, Tv);

fn power_label(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

// ============================================================================
// Remote
// ============================================================================

#[derive(Debug)]
pub struct Remote<'a, D: Device + ?Sized> {
    device: &'a mut D,
}

impl<'a, D: Device + ?Sized> Remote<'a, D> {
    pub fn new(device: &'a mut D) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &D {
        &*self.device
    }
}

impl<D: Device + ?Sized> RemoteControl for Remote<'_, D> {
    fn toggle_power(&mut self, out: &mut dyn Console) {
        let was_enabled = self.device.is_enabled();
        out.say(&format!(
            "🎛 Remote has checked the device and it is {}",
            power_label(was_enabled)
        ));

        if was_enabled {
            self.device.disable();
        } else {
            self.device.enable();
        }

        out.say(&format!(
            "🎛 Remote turned the device {}",
            power_label(self.device.is_enabled())
        ));
    }

    fn volume_down(&mut self, out: &mut dyn Console) {
        let current = self.device.volume();
        if current > 0 {
            self.device.set_volume(current - 1);
            out.say(&format!(
                "🎛 Remote turned the volume down to {}",
                self.device.volume()
            ));
        }
    }

    fn volume_up(&mut self, out: &mut dyn Console) {
        let current = self.device.volume();
        if current < MAX_LEVEL {
            self.device.set_volume(current + 1);
            out.say(&format!(
                "🎛 Remote turned the volume up to {}",
                self.device.volume()
            ));
        }
    }

    fn channel_down(&mut self, out: &mut dyn Console) {
        let current = self.device.channel();
        if current > 0 {
            self.device.set_channel(current - 1);
            out.say(&format!(
                "🎛 Remote turned the channel down to {}",
                self.device.channel()
            ));
        }
    }

    fn channel_up(&mut self, out: &mut dyn Console) {
        let current = self.device.channel();
        if current < MAX_LEVEL {
            self.device.set_channel(current + 1);
            out.say(&format!(
                "🎛 Remote turned the channel up to {}",
                self.device.channel()
            ));
        }
    }

    fn mute(&mut self, out: &mut dyn Console) {
        out.say("🎛 Remote set the volume to 0 (mute)");
        self.device.set_volume(0);
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn demo(out: &mut dyn Console) {
    let mut radio = Radio::new();
    let mut tv = Tv::new();

    out.say("Radio remote:");
    {
        let mut remote = Remote::new(&mut radio);
        for _ in 0..4 {
            remote.volume_up(out);
        }
        for _ in 0..3 {
            remote.volume_down(out);
        }
        for _ in 0..2 {
            remote.toggle_power(out);
        }
        for _ in 0..5 {
            remote.channel_up(out);
        }
        remote.channel_down(out);
    }
    out.say(&format!("Radio ends as {:?}", radio.state()));

    out.blank();
    out.say("TV remote:");
    {
        let mut remote = Remote::new(&mut tv);
        remote.toggle_power(out);
        for _ in 0..4 {
            remote.volume_up(out);
        }
        remote.mute(out);
        remote.volume_up(out);
    }
    out.say(&format!("TV ends as {:?}", tv.state()));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use proptest::prelude::*;

    #[test]
    fn test_volume_up_narrates_new_level() {
        let mut radio = Radio::new();
        let mut out = Transcript::new();
        let mut remote = Remote::new(&mut radio);
        for _ in 0..5 {
            remote.volume_up(&mut out);
        }
        assert_eq!(out.last(), Some("🎛 Remote turned the volume up to 5"));
        assert_eq!(radio.volume(), 5);
    }

    #[test]
    fn test_bounds_are_silent_no_ops() {
        let mut tv = Tv::new();
        let mut out = Transcript::new();

        let mut remote = Remote::new(&mut tv);
        remote.volume_down(&mut out);
        remote.channel_down(&mut out);
        assert!(out.lines().is_empty());
        assert_eq!(remote.device().volume(), 0);

        tv.set_volume(MAX_LEVEL);
        tv.set_channel(MAX_LEVEL);
        let mut remote = Remote::new(&mut tv);
        remote.volume_up(&mut out);
        remote.channel_up(&mut out);
        assert!(out.lines().is_empty());
        assert_eq!(tv.volume(), MAX_LEVEL);
        assert_eq!(tv.channel(), MAX_LEVEL);
    }

    #[test]
    fn test_toggle_power_flips_once_per_call() {
        let mut radio = Radio::new();
        let mut out = Transcript::new();
        let mut remote = Remote::new(&mut radio);

        remote.toggle_power(&mut out);
        assert!(remote.device().is_enabled());
        remote.toggle_power(&mut out);
        assert!(!remote.device().is_enabled());
        remote.toggle_power(&mut out);
        assert!(radio.is_enabled());

        assert_eq!(
            &out.lines()[..2],
            [
                "🎛 Remote has checked the device and it is off",
                "🎛 Remote turned the device on",
            ]
        );
    }

    #[test]
    fn test_enable_and_disable_are_idempotent() {
        let mut radio = Radio::new();
        radio.enable();
        radio.enable();
        assert!(radio.is_enabled());
        radio.disable();
        radio.disable();
        assert!(!radio.is_enabled());
    }

    #[test]
    fn test_mute_always_narrates() {
        let mut tv = Tv::new();
        let mut out = Transcript::new();
        let mut remote = Remote::new(&mut tv);
        remote.mute(&mut out);
        remote.volume_up(&mut out);
        remote.volume_up(&mut out);
        remote.mute(&mut out);

        assert_eq!(tv.volume(), 0);
        assert_eq!(out.last(), Some("🎛 Remote set the volume to 0 (mute)"));
    }

    #[test]
    fn test_remote_over_trait_object() {
        let mut devices: Vec<Box<dyn Device>> = vec![Box::new(Radio::new()), Box::new(Tv::new())];
        let mut out = Transcript::new();
        for device in devices.iter_mut() {
            let mut remote = Remote::new(device.as_mut());
            remote.channel_up(&mut out);
        }
        assert!(devices.iter().all(|d| d.channel() == 1));
    }

    #[test]
    fn test_demo_leaves_devices_in_expected_state() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert!(out.contains(
            "Radio ends as DeviceState { enabled: false, volume: 1, channel: 4 }"
        ));
        assert!(out.contains("TV ends as DeviceState { enabled: true, volume: 1, channel: 0 }"));
    }

    #[derive(Debug, Clone, Copy)]
    enum Press {
        VolumeUp,
        VolumeDown,
        ChannelUp,
        ChannelDown,
    }

    fn press() -> impl Strategy<Value = Press> {
        prop_oneof![
            Just(Press::VolumeUp),
            Just(Press::VolumeDown),
            Just(Press::ChannelUp),
            Just(Press::ChannelDown),
        ]
    }

    proptest! {
        #[test]
        fn test_levels_stay_within_bounds(presses in prop::collection::vec(press(), 0..400)) {
            let mut tv = Tv::new();
            let mut out = Transcript::new();
            let mut remote = Remote::new(&mut tv);
            for p in presses {
                match p {
                    Press::VolumeUp => remote.volume_up(&mut out),
                    Press::VolumeDown => remote.volume_down(&mut out),
                    Press::ChannelUp => remote.channel_up(&mut out),
                    Press::ChannelDown => remote.channel_down(&mut out),
                }
                prop_assert!(remote.device().volume() <= MAX_LEVEL);
                prop_assert!(remote.device().channel() <= MAX_LEVEL);
            }
        }

        #[test]
        fn test_remote_matches_direct_device_calls(start in 0u8..=MAX_LEVEL, ups in 0usize..150) {
            let mut via_remote = Radio::new();
            via_remote.set_volume(start);
            let mut direct = via_remote.clone();

            let mut out = Transcript::new();
            let mut remote = Remote::new(&mut via_remote);
            for _ in 0..ups {
                remote.volume_up(&mut out);
            }

            for _ in 0..ups {
                if direct.volume() < MAX_LEVEL {
                    let next = direct.volume() + 1;
                    direct.set_volume(next);
                }
            }
            prop_assert_eq!(via_remote, direct);
        }
    }
}
