//! Persisted settings image
//!
//! The image is one layout tag byte followed by a postcard-serialized
//! [`DeviceConfig`]. The tag is bumped whenever the serialized shape
//! changes; a tag mismatch found at boot is a provisioning error the device
//! cannot recover from on its own.

use super::types::DeviceConfig;

/// Current settings layout tag
pub const SETTINGS_LAYOUT: u8 = 4;

/// Errors from the settings codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Image is zero-length
    Empty,
    /// Stored layout tag does not match this firmware
    LayoutMismatch {
        /// Tag found in the image
        found: u8,
    },
    /// Body failed to deserialize
    Corrupt,
    /// Output buffer cannot hold the encoded image
    BufferTooSmall,
}

/// Decode a settings image, verifying the layout tag first
pub fn decode_settings(image: &[u8]) -> Result<DeviceConfig, SettingsError> {
    let (&tag, body) = image.split_first().ok_or(SettingsError::Empty)?;
    if tag != SETTINGS_LAYOUT {
        return Err(SettingsError::LayoutMismatch { found: tag });
    }
    postcard::from_bytes(body).map_err(|_| SettingsError::Corrupt)
}

/// Encode a settings image into `buf`, returning the bytes used
pub fn encode_settings(config: &DeviceConfig, buf: &mut [u8]) -> Result<usize, SettingsError> {
    let (tag, body) = buf.split_first_mut().ok_or(SettingsError::BufferTooSmall)?;
    *tag = SETTINGS_LAYOUT;
    let used = postcard::to_slice(config, body)
        .map_err(|_| SettingsError::BufferTooSmall)?
        .len();
    Ok(1 + used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::RadioConfig;

    #[test]
    fn test_roundtrip() {
        let config = DeviceConfig {
            radio: RadioConfig {
                enabled: false,
                address: 0x1D,
                cadence_s: 8,
            },
            ..Default::default()
        };

        let mut buf = [0u8; 64];
        let len = encode_settings(&config, &mut buf).unwrap();
        assert!(len > 1);
        assert_eq!(buf[0], SETTINGS_LAYOUT);

        let decoded = decode_settings(&buf[..len]).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_layout_mismatch() {
        let mut buf = [0u8; 64];
        let len = encode_settings(&DeviceConfig::default(), &mut buf).unwrap();
        buf[0] = SETTINGS_LAYOUT.wrapping_add(1);

        assert_eq!(
            decode_settings(&buf[..len]),
            Err(SettingsError::LayoutMismatch {
                found: SETTINGS_LAYOUT + 1
            })
        );
    }

    #[test]
    fn test_truncated_body_is_corrupt() {
        let mut buf = [0u8; 64];
        let len = encode_settings(&DeviceConfig::default(), &mut buf).unwrap();

        assert_eq!(
            decode_settings(&buf[..len - 1]),
            Err(SettingsError::Corrupt)
        );
    }

    #[test]
    fn test_empty_image() {
        assert_eq!(decode_settings(&[]), Err(SettingsError::Empty));
    }

    #[test]
    fn test_encode_into_tiny_buffer() {
        let mut empty: [u8; 0] = [];
        assert_eq!(
            encode_settings(&DeviceConfig::default(), &mut empty),
            Err(SettingsError::BufferTooSmall)
        );

        let mut one = [0u8; 1];
        assert_eq!(
            encode_settings(&DeviceConfig::default(), &mut one),
            Err(SettingsError::BufferTooSmall)
        );
    }
}
