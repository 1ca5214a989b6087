//! Dotted IP address utilities
//!
//!Addresses come in two shapes: the classic four octet, 32 bit form and an
//!extended six octet, 48 bit form ("1.2.3.4.5.6"). The extended form is a
//!fixed width dotted decimal quantity, NOT RFC 4291 IPv6.
//!
//!Arithmetic and bitwise operations build fresh addresses, only
//![set_octet](enum.Ip.html#method.set_octet) mutates the receiver. Ordering
//!across the two shapes is a contract error, so comparison goes through the
//!fallible [compare](enum.Ip.html#method.compare) rather than `Ord`.

#![no_std]
#![warn(missing_docs)]
#![allow(clippy::style)]

extern crate alloc;

mod parser;
pub mod base;
pub mod v4;
pub mod v6;

use core::cmp::Ordering;
use core::fmt;

use alloc::format;
use alloc::string::String;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
///Address shape tag
pub enum Version {
    ///Classic four octet, 32 bit form
    V4,
    ///Extended six octet, 48 bit form (not RFC 4291 IPv6)
    V6Ext,
}

impl Version {
    #[inline]
    ///Maps numeric version onto the tag, accepting only `4` and `6`
    pub const fn from_number(version: u8) -> Result<Self, Error> {
        match version {
            4 => Ok(Self::V4),
            6 => Ok(Self::V6Ext),
            version => Err(Error::InvalidVersion(version)),
        }
    }

    #[inline(always)]
    ///Returns numeric version, `4` or `6`
    pub const fn number(&self) -> u8 {
        match self {
            Self::V4 => 4,
            Self::V6Ext => 6,
        }
    }

    #[inline(always)]
    ///Returns number of octets within the address
    pub const fn octets(&self) -> usize {
        match self {
            Self::V4 => 4,
            Self::V6Ext => 6,
        }
    }

    #[inline(always)]
    ///Returns number of bits within the address
    pub const fn bits(&self) -> u8 {
        match self {
            Self::V4 => v4::BITS_LEN,
            Self::V6Ext => v6::BITS_LEN,
        }
    }

    #[inline(always)]
    ///Returns maximum magnitude of the address
    pub const fn max(&self) -> u64 {
        match self {
            Self::V4 => v4::Addr::MAX,
            Self::V6Ext => v6::Addr::MAX,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
///Possible failures of address operations
pub enum Error {
    ///Text is not a well formed dotted address
    InvalidFormat,
    ///Numeric version is something else than 4 or 6
    InvalidVersion(u8),
    ///Prefix length is outside the address' bit width
    InvalidPrefixLength(u8),
    ///Text is not a well formed `<address>/<prefix>` subnet
    InvalidSubnet,
    ///Operation mixes two addresses of different versions
    VersionMismatch,
    ///Octet index is past the last octet of the address
    IndexOutOfRange(usize),
    ///Result would exceed the address' maximum magnitude
    Overflow,
    ///Result would be negative
    Underflow,
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => fmt.write_str("Text is not a valid dotted address"),
            Self::InvalidVersion(version) => fmt.write_fmt(format_args!("Version '{version}' is not 4 or 6")),
            Self::InvalidPrefixLength(prefix) => fmt.write_fmt(format_args!("Prefix length '{prefix}' is outside the address width")),
            Self::InvalidSubnet => fmt.write_str("Text is not a valid subnet specification"),
            Self::VersionMismatch => fmt.write_str("Cannot combine addresses of different versions"),
            Self::IndexOutOfRange(index) => fmt.write_fmt(format_args!("Octet index '{index}' is past the last octet")),
            Self::Overflow => fmt.write_str("Result exceeds the address maximum"),
            Self::Underflow => fmt.write_str("Result is below zero"),
        }
    }
}

impl core::error::Error for Error {}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
///Dotted address, either classic four octet or extended six octet form
pub enum Ip {
    ///Classic 32 bit address
    V4(v4::Addr),
    ///Extended 48 bit address (not RFC 4291 IPv6)
    V6Ext(v6::Addr),
}

impl Ip {
    ///Number of bits within the four octet form
    pub const V4_BITS: u8 = v4::BITS_LEN;
    ///Number of bits within the six octet form
    pub const V6_BITS: u8 = v6::BITS_LEN;

    #[inline]
    ///Parses dotted decimal text, picking the version from the number of groups
    ///
    ///Exactly 4 groups make a [V4](enum.Version.html#variant.V4) address and
    ///exactly 6 groups make a [V6Ext](enum.Version.html#variant.V6Ext) one.
    pub const fn parse(text: &str) -> Result<Self, Error> {
        parser::parse_dots(text)
    }

    ///Constructs address of the specified `version` with `value` as magnitude
    ///
    ///The `version` argument is always honored verbatim: a `value` above the
    ///version's maximum is refused rather than promoted to the wider form.
    pub const fn from_bits(value: u64, version: Version) -> Result<Self, Error> {
        if value > version.max() {
            return Err(Error::InvalidFormat);
        }

        Ok(Self::with_bits_of(value, version))
    }

    //Rebuilds address of `version` from `bits`, which must already be within range
    const fn with_bits_of(bits: u64, version: Version) -> Self {
        match version {
            Version::V4 => Self::V4(v4::Addr::from_bits(bits)),
            Version::V6Ext => Self::V6Ext(v6::Addr::from_bits(bits)),
        }
    }

    //Returns common version of two operands
    const fn version_with(&self, other: &Self) -> Result<Version, Error> {
        match (self, other) {
            (Self::V4(_), Self::V4(_)) => Ok(Version::V4),
            (Self::V6Ext(_), Self::V6Ext(_)) => Ok(Version::V6Ext),
            _ => Err(Error::VersionMismatch),
        }
    }

    #[inline(always)]
    ///Returns version of the address
    pub const fn version(&self) -> Version {
        match self {
            Self::V4(_) => Version::V4,
            Self::V6Ext(_) => Version::V6Ext,
        }
    }

    #[inline(always)]
    ///Returns magnitude of the address
    pub const fn to_bits(&self) -> u64 {
        match self {
            Self::V4(addr) => addr.to_bits(),
            Self::V6Ext(addr) => addr.to_bits(),
        }
    }

    #[inline(always)]
    ///Returns octets of the address, most significant first
    pub const fn octets(&self) -> &[u8] {
        match self {
            Self::V4(addr) => addr.as_slice(),
            Self::V6Ext(addr) => addr.as_slice(),
        }
    }

    #[inline]
    ///Renders the magnitude as zero padded binary text of the full address width
    ///
    ///When `pretty` is specified, bytes are separated by dots.
    pub fn to_bin(&self, pretty: bool) -> String {
        match self {
            Self::V4(addr) => addr.to_bin(pretty),
            Self::V6Ext(addr) => addr.to_bin(pretty),
        }
    }

    #[inline]
    ///Renders the magnitude as zero padded lowercase hex text of the full address width
    ///
    ///When `pretty` is specified, bytes are separated by dots.
    pub fn to_hex(&self, pretty: bool) -> String {
        match self {
            Self::V4(addr) => addr.to_hex(pretty),
            Self::V6Ext(addr) => addr.to_hex(pretty),
        }
    }

    ///Returns new address with magnitude increased by `delta`
    ///
    ///Stepping past the version's maximum is refused.
    pub const fn add(&self, delta: u64) -> Result<Self, Error> {
        let version = self.version();
        match self.to_bits().checked_add(delta) {
            Some(value) => if value > version.max() {
                Err(Error::Overflow)
            } else {
                Ok(Self::with_bits_of(value, version))
            },
            None => Err(Error::Overflow),
        }
    }

    ///Returns new address with magnitude decreased by `delta`
    ///
    ///Stepping below zero is refused.
    pub const fn subtract(&self, delta: u64) -> Result<Self, Error> {
        match self.to_bits().checked_sub(delta) {
            Some(value) => Ok(Self::with_bits_of(value, self.version())),
            None => Err(Error::Underflow),
        }
    }

    #[inline]
    ///Compares magnitudes of two addresses of the same version
    ///
    ///Mixing versions is refused, so the derived predicates are reached
    ///through [Ordering](core::cmp::Ordering), e.g. `a.compare(&b)?.is_lt()`.
    pub fn compare(&self, other: &Self) -> Result<Ordering, Error> {
        self.version_with(other)?;
        Ok(self.to_bits().cmp(&other.to_bits()))
    }

    #[inline]
    ///Returns octet at `index`, counting from the most significant one
    pub const fn octet(&self, index: usize) -> Result<u8, Error> {
        match self {
            Self::V4(addr) => addr.octet(index),
            Self::V6Ext(addr) => addr.octet(index),
        }
    }

    #[inline]
    ///Sets octet at `index`, counting from the most significant one
    ///
    ///The octets are the only stored state, hence magnitude and text forms
    ///follow the mutation with no intermediate state. On error the address is
    ///left untouched.
    pub const fn set_octet(&mut self, index: usize, value: u8) -> Result<(), Error> {
        match self {
            Self::V4(addr) => addr.set_octet(index, value),
            Self::V6Ext(addr) => addr.set_octet(index, value),
        }
    }

    ///Returns new address with magnitude shifted right by `shift` bits
    pub const fn shift_right(&self, shift: u32) -> Self {
        let bits = match self.to_bits().checked_shr(shift) {
            Some(bits) => bits,
            None => 0,
        };
        Self::with_bits_of(bits, self.version())
    }

    ///Returns new address with magnitude shifted left by `shift` bits
    ///
    ///Bits pushed past the address width are silently discarded, unlike
    ///[add](#method.add) which refuses to overflow.
    pub const fn shift_left(&self, shift: u32) -> Self {
        let version = self.version();
        let bits = match self.to_bits().checked_shl(shift) {
            Some(bits) => bits & version.max(),
            None => 0,
        };
        Self::with_bits_of(bits, version)
    }

    ///Returns bitwise OR of two addresses of the same version
    pub const fn bit_or(&self, other: &Self) -> Result<Self, Error> {
        match self.version_with(other) {
            Ok(version) => Ok(Self::with_bits_of(self.to_bits() | other.to_bits(), version)),
            Err(error) => Err(error),
        }
    }

    ///Returns bitwise AND of two addresses of the same version
    pub const fn bit_and(&self, other: &Self) -> Result<Self, Error> {
        match self.version_with(other) {
            Ok(version) => Ok(Self::with_bits_of(self.to_bits() & other.to_bits(), version)),
            Err(error) => Err(error),
        }
    }

    ///Returns bitwise XOR of two addresses of the same version
    pub const fn bit_xor(&self, other: &Self) -> Result<Self, Error> {
        match self.version_with(other) {
            Ok(version) => Ok(Self::with_bits_of(self.to_bits() ^ other.to_bits(), version)),
            Err(error) => Err(error),
        }
    }

    ///Returns the `<network>/<prefix>` block of the given prefix length that contains the address
    pub fn cidr(&self, prefix: u8) -> Result<String, Error> {
        if prefix < 1 || prefix > self.version().bits() {
            return Err(Error::InvalidPrefixLength(prefix));
        }

        let network = match self {
            Self::V4(addr) => Self::V4(addr.network_addr(prefix)),
            Self::V6Ext(addr) => Self::V6Ext(addr.network_addr(prefix)),
        };
        Ok(format!("{network}/{prefix}"))
    }

    ///Checks whether the address belongs to the `<address>/<prefix>` subnet
    ///
    ///The check is textual: the network address of `self` under the subnet's
    ///prefix must render exactly as the subnet's own address text, so a
    ///subnet spelled in a non canonical way never contains anything.
    pub fn included_in(&self, subnet: &str) -> Result<bool, Error> {
        let subnet = parser::split_subnet(subnet)?;
        if self.version() != subnet.version {
            return Err(Error::VersionMismatch);
        }

        let cidr = self.cidr(subnet.prefix)?;
        Ok(cidr == format!("{}/{}", subnet.addr, subnet.prefix_text))
    }
}

impl fmt::Display for Ip {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(addr) => fmt::Display::fmt(addr, fmt),
            Self::V6Ext(addr) => fmt::Display::fmt(addr, fmt),
        }
    }
}

impl core::str::FromStr for Ip {
    type Err = Error;

    #[inline(always)]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl From<v4::Addr> for Ip {
    #[inline(always)]
    fn from(addr: v4::Addr) -> Self {
        Self::V4(addr)
    }
}

impl From<v6::Addr> for Ip {
    #[inline(always)]
    fn from(addr: v6::Addr) -> Self {
        Self::V6Ext(addr)
    }
}

#[inline]
///Parses dotted decimal text into its magnitude
pub const fn parse_to_int(text: &str) -> Result<u64, Error> {
    match Ip::parse(text) {
        Ok(ip) => Ok(ip.to_bits()),
        Err(error) => Err(error),
    }
}

#[inline]
///Parses dotted decimal text and renders its magnitude as binary text
pub fn to_binary_string(text: &str, pretty: bool) -> Result<String, Error> {
    Ok(Ip::parse(text)?.to_bin(pretty))
}

#[inline]
///Parses dotted decimal text and renders its magnitude as lowercase hex text
pub fn to_hex_string(text: &str, pretty: bool) -> Result<String, Error> {
    Ok(Ip::parse(text)?.to_hex(pretty))
}

#[inline]
///Detects the version of dotted decimal text from its number of groups
///
///Only the shape is inspected, group values are not range checked.
pub const fn detect_version(text: &str) -> Result<Version, Error> {
    match parser::dot_group_count(text) {
        Some(4) => Ok(Version::V4),
        Some(6) => Ok(Version::V6Ext),
        _ => Err(Error::InvalidFormat),
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;

    use super::Ip;

    impl serde::Serialize for Ip {
        #[inline]
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct IpVisitor;

    impl serde::de::Visitor<'_> for IpVisitor {
        type Value = Ip;

        fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt.write_str("dotted decimal address with 4 or 6 groups")
        }

        #[inline]
        fn visit_str<E: serde::de::Error>(self, text: &str) -> Result<Self::Value, E> {
            Ip::parse(text).map_err(serde::de::Error::custom)
        }
    }

    impl<'de> serde::Deserialize<'de> for Ip {
        #[inline]
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(IpVisitor)
        }
    }
}
