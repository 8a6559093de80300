use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{parse::parse_mac_address, OctetCountError, ParseError};

/// Well-known addresses that can be built without any input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    Zero,
    Broadcast,
}

/// 48-bit hardware address (EUI-48), most significant octet first.
///
/// Serializes as `{"eui":[o0,o1,o2,o3,o4,o5]}`.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacAddress {
    eui: [u8; 6],
}

impl MacAddress {
    pub const ZERO: Self = Self { eui: [0x00; 6] };
    pub const BROADCAST: Self = Self { eui: [0xff; 6] };

    pub const fn new(kind: Kind) -> Self {
        match kind {
            Kind::Zero => Self::ZERO,
            Kind::Broadcast => Self::BROADCAST,
        }
    }

    /// Returns `None` unless `bytes` holds exactly 6 octets.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        Self::try_from(bytes).ok()
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.eui
    }

    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.eui
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Individual/group bit of the first octet is clear.
    pub const fn is_unicast(&self) -> bool {
        self.eui[0] & 0x01 == 0
    }

    pub const fn is_multicast(&self) -> bool {
        !self.is_unicast()
    }

    /// Universal/local bit of the first octet is clear.
    pub const fn is_universal(&self) -> bool {
        self.eui[0] & 0x02 == 0
    }

    pub const fn is_local(&self) -> bool {
        !self.is_universal()
    }

    /// `0x123456abcdef`
    pub fn hexadecimal(&self) -> String {
        let [a, b, c, d, e, f] = self.eui;
        format!("0x{a:02x}{b:02x}{c:02x}{d:02x}{e:02x}{f:02x}")
    }

    /// `12:34:56:ab:cd:ef`
    pub fn hex_format(&self) -> String {
        self.separated(':')
    }

    /// `1234.56ab.cdef`
    pub fn dot_format(&self) -> String {
        let [a, b, c, d, e, f] = self.eui;
        format!("{a:02x}{b:02x}.{c:02x}{d:02x}.{e:02x}{f:02x}")
    }

    /// `12-34-56-ab-cd-ef`
    pub fn canonical_format(&self) -> String {
        self.separated('-')
    }

    /// Modified EUI-64 interface identifier: the universal/local bit is
    /// inverted and `ff:fe` is inserted between the third and fourth octets.
    pub fn interface_id(&self) -> String {
        let [a, b, c, d, e, f] = self.eui;
        format!(
            "{:02x}{b:02x}:{c:02x}ff:fe{d:02x}:{e:02x}{f:02x}",
            a ^ 0x02
        )
    }

    pub fn link_local(&self) -> String {
        format!("ff80::{}", self.interface_id())
    }

    fn separated(&self, separator: char) -> String {
        let [a, b, c, d, e, f] = self.eui;
        let s = separator;
        format!("{a:02x}{s}{b:02x}{s}{c:02x}{s}{d:02x}{s}{e:02x}{s}{f:02x}")
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_format())
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddress(\"{}\")", self)
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(eui: [u8; 6]) -> Self {
        Self { eui }
    }
}

impl From<MacAddress> for [u8; 6] {
    fn from(mac: MacAddress) -> Self {
        mac.eui
    }
}

impl TryFrom<&[u8]> for MacAddress {
    type Error = OctetCountError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let eui: [u8; 6] = bytes
            .try_into()
            .map_err(|_| OctetCountError(bytes.len()))?;
        Ok(eui.into())
    }
}

impl TryFrom<Vec<u8>> for MacAddress {
    type Error = OctetCountError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(bytes.as_slice())
    }
}

impl FromStr for MacAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mac_address(s).map(Self::from)
    }
}
