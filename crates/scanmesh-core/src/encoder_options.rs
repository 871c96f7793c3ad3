//! Options passed through to the codec.

use std::collections::HashMap;

/// Speed used when none is configured: slowest, best compression.
pub const DEFAULT_SPEED: i32 = 0;

/// Fastest speed setting the codec documents.
pub const MAX_SPEED: i32 = 10;

/// Global integer options keyed by name.
///
/// Encoding and decoding speed range from 0 to 10, where 0 is the slowest
/// but provides the best compression. Values are not validated here; the
/// codec decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderOptions {
    global_options: HashMap<String, i32>,
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with both speeds set.
    pub fn with_speed(encoding_speed: i32, decoding_speed: i32) -> Self {
        let mut options = Self::new();
        options.set_speed(encoding_speed, decoding_speed);
        options
    }

    pub fn encoding_speed(&self) -> i32 {
        self.get_global_int("encoding_speed", DEFAULT_SPEED)
    }

    pub fn decoding_speed(&self) -> i32 {
        self.get_global_int("decoding_speed", DEFAULT_SPEED)
    }

    pub fn set_encoding_speed(&mut self, speed: i32) {
        self.set_global_int("encoding_speed", speed);
    }

    pub fn set_decoding_speed(&mut self, speed: i32) {
        self.set_global_int("decoding_speed", speed);
    }

    pub fn set_speed(&mut self, encoding_speed: i32, decoding_speed: i32) {
        self.set_encoding_speed(encoding_speed);
        self.set_decoding_speed(decoding_speed);
    }

    /// Pins the bitstream version written by the codec.
    pub fn set_version(&mut self, major: u8, minor: u8) {
        self.set_global_int("version_major", i32::from(major));
        self.set_global_int("version_minor", i32::from(minor));
    }

    /// The pinned bitstream version, if both parts are set and fit in a byte.
    pub fn version(&self) -> Option<(u8, u8)> {
        let major = self.global_options.get("version_major")?;
        let minor = self.global_options.get("version_minor")?;
        Some((u8::try_from(*major).ok()?, u8::try_from(*minor).ok()?))
    }

    /// True when either version key is set, even if `version` can't read it.
    pub fn pins_version(&self) -> bool {
        self.global_options.contains_key("version_major")
            || self.global_options.contains_key("version_minor")
    }

    pub fn set_global_int(&mut self, key: &str, value: i32) {
        self.global_options.insert(key.to_string(), value);
    }

    pub fn get_global_int(&self, key: &str, default_val: i32) -> i32 {
        self.global_options.get(key).copied().unwrap_or(default_val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_slowest() {
        let options = EncoderOptions::default();
        assert_eq!(options.encoding_speed(), 0);
        assert_eq!(options.decoding_speed(), 0);
        assert_eq!(options.version(), None);
    }

    #[test]
    fn speeds_are_stored_unvalidated() {
        let options = EncoderOptions::with_speed(7, 42);
        assert_eq!(options.encoding_speed(), 7);
        assert_eq!(options.decoding_speed(), 42);
    }

    #[test]
    fn version_needs_both_parts() {
        let mut options = EncoderOptions::new();
        options.set_global_int("version_major", 2);
        assert_eq!(options.version(), None);
        options.set_version(2, 2);
        assert_eq!(options.version(), Some((2, 2)));
    }

    #[test]
    fn out_of_byte_version_is_not_read_back() {
        let mut options = EncoderOptions::new();
        options.set_version(2, 2);
        options.set_global_int("version_major", 258);
        assert_eq!(options.version(), None);
        assert!(options.pins_version());

        options.set_version(2, 2);
        options.set_global_int("version_minor", -1);
        assert_eq!(options.version(), None);
        assert!(!EncoderOptions::new().pins_version());
    }
}
