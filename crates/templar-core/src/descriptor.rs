//! Per-field visibility metadata.
//!
//! An [`AttributeDescriptor`] records, for every registered channel, whether a
//! field is exposed on it. Descriptors are plain values: they are `Copy`,
//! compare by their flags, and have no mutating methods. Everything starts
//! hidden and is opened up one channel at a time.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::channel::{channels, registry_slot, Channel};
use crate::error::Result;

const API_BIT: u32 = channel_bit(Channel::API_VISIBLE);
const UI_BIT: u32 = channel_bit(Channel::UI_VISIBLE);

/// Only evaluated in const items, so an unregistered channel is a compile error.
const fn channel_bit(channel: Channel) -> u32 {
    match registry_slot(channel.name()) {
        Some(slot) => 1 << slot,
        None => panic!("channel is not registered"),
    }
}

/// Visibility of a field on each registered channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttributeDescriptor {
    visible: u32,
}

impl AttributeDescriptor {
    /// Hidden on every channel.
    pub const HIDDEN: Self = Self::new();
    pub const API_ONLY: Self = Self::new().api_visible();
    pub const UI_ONLY: Self = Self::new().ui_visible();
    pub const EVERYWHERE: Self = Self::new().api_visible().ui_visible();

    /// Create a descriptor hidden on every channel.
    pub const fn new() -> Self {
        Self { visible: 0 }
    }

    /// Also expose on [`Channel::API_VISIBLE`].
    pub const fn api_visible(self) -> Self {
        Self {
            visible: self.visible | API_BIT,
        }
    }

    /// Also expose on [`Channel::UI_VISIBLE`].
    pub const fn ui_visible(self) -> Self {
        Self {
            visible: self.visible | UI_BIT,
        }
    }

    /// Return a copy with `channel` set to `visible`.
    pub fn with_channel(self, channel: Channel, visible: bool) -> Result<Self> {
        let bit = 1u32 << channel.position()?;
        let flags = if visible {
            self.visible | bit
        } else {
            self.visible & !bit
        };
        Ok(Self { visible: flags })
    }

    /// Build a descriptor visible on exactly the given channels.
    pub fn from_channels(channels: &[Channel]) -> Result<Self> {
        channels
            .iter()
            .try_fold(Self::HIDDEN, |desc, channel| desc.with_channel(*channel, true))
    }

    /// Whether the field is exposed on `channel`.
    ///
    /// Unregistered channels are an error, never a silent `false`.
    pub fn is_visible(&self, channel: Channel) -> Result<bool> {
        let slot = channel.position()?;
        Ok(self.visible & (1 << slot) != 0)
    }

    /// Registered channels this descriptor exposes, in registry order.
    pub fn visible_channels(&self) -> Vec<Channel> {
        channels()
            .enumerate()
            .filter(|(slot, _)| self.visible & (1 << slot) != 0)
            .map(|(_, channel)| channel)
            .collect()
    }

    pub fn is_hidden(&self) -> bool {
        self.visible == 0
    }
}

impl Serialize for AttributeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (slot, channel) in channels().enumerate() {
            map.serialize_entry(channel.name(), &(self.visible & (1 << slot) != 0))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplarError;

    #[test]
    fn default_is_hidden_everywhere() {
        let desc = AttributeDescriptor::default();
        assert_eq!(desc, AttributeDescriptor::HIDDEN);
        for channel in channels() {
            assert!(!desc.is_visible(channel).unwrap());
        }
        assert!(desc.is_hidden());
    }

    #[test]
    fn const_builders_set_one_channel_each() {
        let api = AttributeDescriptor::API_ONLY;
        assert!(api.is_visible(Channel::API_VISIBLE).unwrap());
        assert!(!api.is_visible(Channel::UI_VISIBLE).unwrap());

        let ui = AttributeDescriptor::UI_ONLY;
        assert!(!ui.is_visible(Channel::API_VISIBLE).unwrap());
        assert!(ui.is_visible(Channel::UI_VISIBLE).unwrap());
    }

    #[test]
    fn with_channel_returns_new_value() {
        let base = AttributeDescriptor::HIDDEN;
        let opened = base.with_channel(Channel::UI_VISIBLE, true).unwrap();
        assert!(base.is_hidden());
        assert_eq!(opened, AttributeDescriptor::UI_ONLY);

        let closed = AttributeDescriptor::EVERYWHERE
            .with_channel(Channel::UI_VISIBLE, false)
            .unwrap();
        assert_eq!(closed, AttributeDescriptor::API_ONLY);
    }

    #[test]
    fn from_channels_matches_const_builders() {
        let desc =
            AttributeDescriptor::from_channels(&[Channel::UI_VISIBLE, Channel::API_VISIBLE])
                .unwrap();
        assert_eq!(desc, AttributeDescriptor::new().api_visible().ui_visible());
        assert_eq!(
            AttributeDescriptor::from_channels(&[]).unwrap(),
            AttributeDescriptor::HIDDEN
        );
    }

    #[test]
    fn unregistered_channel_is_an_error() {
        let err = AttributeDescriptor::EVERYWHERE
            .is_visible(Channel::new("print_visible"))
            .unwrap_err();
        assert!(matches!(err, TemplarError::InvalidChannel(_)));

        assert!(AttributeDescriptor::HIDDEN
            .with_channel(Channel::new("print_visible"), true)
            .is_err());
    }

    #[test]
    fn lookups_are_repeatable() {
        let desc = AttributeDescriptor::API_ONLY;
        for _ in 0..3 {
            assert!(desc.is_visible(Channel::API_VISIBLE).unwrap());
            assert!(!desc.is_visible(Channel::UI_VISIBLE).unwrap());
        }
    }

    #[test]
    fn visible_channels_in_registry_order() {
        assert_eq!(
            AttributeDescriptor::EVERYWHERE.visible_channels(),
            vec![Channel::API_VISIBLE, Channel::UI_VISIBLE]
        );
        assert!(AttributeDescriptor::HIDDEN.visible_channels().is_empty());
    }

    #[test]
    fn serializes_as_channel_map() {
        let json = serde_json::to_string(&AttributeDescriptor::UI_ONLY).unwrap();
        assert_eq!(json, r#"{"api_visible":false,"ui_visible":true}"#);
    }
}
