//! Visibility channels and their registry.
//!
//! A channel names an audience a projection is produced for. The set of
//! recognized channels lives in [`CHANNELS`]; a [`Channel`] value can name
//! anything, but only registered names resolve to a slot in an
//! [`AttributeDescriptor`](crate::AttributeDescriptor).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, TemplarError};

/// Upper bound on registered channels (one bit each in a descriptor).
pub const MAX_CHANNELS: usize = 32;

/// Registry entry for a recognized channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSpec {
    /// Canonical name (e.g., "api_visible")
    pub name: &'static str,
    /// Short alias accepted by [`Channel::parse`] (e.g., "api")
    pub alias: &'static str,
    /// Human readable label
    pub label: &'static str,
}

impl ChannelSpec {
    const fn new(name: &'static str, alias: &'static str, label: &'static str) -> Self {
        Self { name, alias, label }
    }
}

/// Registry of recognized channels.
///
/// Registry order is the slot order used by descriptors and the order
/// channels are listed in. Adding a channel means adding an entry here.
pub const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec::new("api_visible", "api", "API"),
    ChannelSpec::new("ui_visible", "ui", "UI"),
];

const _: () = assert!(CHANNELS.len() <= MAX_CHANNELS);

/// A visibility channel, identified by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Channel(&'static str);

impl Channel {
    pub const API_VISIBLE: Channel = Channel("api_visible");
    pub const UI_VISIBLE: Channel = Channel("ui_visible");

    /// Name a channel. The name is not checked against the registry here;
    /// unrecognized channels fail at lookup time.
    pub const fn new(name: &'static str) -> Self {
        Channel(name)
    }

    /// Resolve user input to a recognized channel.
    ///
    /// Matches the canonical name or alias, ignoring ASCII case, so
    /// `"api"`, `"api_visible"` and `"API_VISIBLE"` all resolve to
    /// [`Channel::API_VISIBLE`].
    pub fn parse(input: &str) -> Result<Channel> {
        let needle = input.trim();
        CHANNELS
            .iter()
            .find(|spec| {
                spec.name.eq_ignore_ascii_case(needle) || spec.alias.eq_ignore_ascii_case(needle)
            })
            .map(|spec| Channel(spec.name))
            .ok_or_else(|| TemplarError::InvalidChannel(input.to_string()))
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }

    /// Registry slot of this channel.
    pub fn position(&self) -> Result<usize> {
        registry_slot(self.0).ok_or_else(|| TemplarError::InvalidChannel(self.0.to_string()))
    }

    pub fn is_recognized(&self) -> bool {
        registry_slot(self.0).is_some()
    }

    /// Registry entry, if recognized.
    pub fn spec(&self) -> Option<&'static ChannelSpec> {
        registry_slot(self.0).map(|slot| &CHANNELS[slot])
    }

    /// Display label, falling back to the raw name for unrecognized channels.
    pub fn label(&self) -> &'static str {
        self.spec().map(|spec| spec.label).unwrap_or(self.0)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for Channel {
    type Err = TemplarError;

    fn from_str(s: &str) -> Result<Self> {
        Channel::parse(s)
    }
}

/// All recognized channels, in registry order.
pub fn channels() -> impl Iterator<Item = Channel> {
    CHANNELS.iter().map(|spec| Channel(spec.name))
}

pub(crate) const fn registry_slot(name: &str) -> Option<usize> {
    let mut slot = 0;
    while slot < CHANNELS.len() {
        if const_str_eq(CHANNELS[slot].name, name) {
            return Some(slot);
        }
        slot += 1;
    }
    None
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
