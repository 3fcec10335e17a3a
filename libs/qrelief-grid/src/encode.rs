//! # Symbol Encoding
//!
//! Delegates QR symbol encoding to the `qrcode` collaborator and
//! normalizes its module matrix into a [`BinaryGrid`].
//!
//! The collaborator owns all symbol-level concerns (data analysis, error
//! correction, masking); this module only maps the recognized option
//! surface onto its API and converts failures into [`GridError`] values.

use qrcode::bits::Bits;
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode, Version};
use serde::{Deserialize, Serialize};

use config::constants::{MAX_SYMBOL_VERSION, MIN_SYMBOL_VERSION};

use crate::error::GridError;
use crate::grid::BinaryGrid;

// =============================================================================
// OPTIONS
// =============================================================================

/// Data encoding mode for the symbol.
///
/// `Automatic` lets the collaborator pick the densest mode for the
/// payload; the explicit modes force a single segment of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EncodeMode {
    /// Collaborator chooses per payload.
    #[default]
    Automatic,
    /// Digits, uppercase letters, and ` $%*+-./:`.
    Alphanumeric,
    /// ASCII digits only.
    Numeric,
    /// Arbitrary bytes.
    Binary,
    /// Shift-JIS double-byte characters.
    Kanji,
}

/// Error-correction level for the symbol.
///
/// `Automatic` maps to level H, trading symbol density for the highest
/// scan tolerance on a physical relief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// Level H.
    #[default]
    Automatic,
    /// ~7% recovery.
    L,
    /// ~15% recovery.
    M,
    /// ~25% recovery.
    Q,
    /// ~30% recovery.
    H,
}

impl ErrorCorrection {
    fn ec_level(self) -> EcLevel {
        match self {
            Self::L => EcLevel::L,
            Self::M => EcLevel::M,
            Self::Q => EcLevel::Q,
            Self::Automatic | Self::H => EcLevel::H,
        }
    }
}

/// Recognized encoding options, all defaulted.
///
/// # Example
///
/// ```rust
/// use qrelief_grid::{EncodeMode, EncodeOptions};
///
/// let options = EncodeOptions {
///     version: Some(2),
///     mode: EncodeMode::Alphanumeric,
///     ..EncodeOptions::default()
/// };
/// assert_eq!(options.version, Some(2));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Explicit symbol version (1–40), or None for the smallest fit.
    pub version: Option<u8>,
    /// Data encoding mode.
    pub mode: EncodeMode,
    /// Error-correction level.
    pub error_correction: ErrorCorrection,
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a message into a binary module grid.
///
/// # Errors
///
/// - [`GridError::InvalidVersion`] for an explicit version outside 1–40.
/// - [`GridError::InvalidMessage`] when the payload cannot be carried by
///   the explicitly chosen mode.
/// - [`GridError::Encoding`] when the collaborator rejects the
///   message/option combination (typically: data too long for the
///   pinned version).
pub fn encode(message: &str, options: &EncodeOptions) -> Result<BinaryGrid, GridError> {
    if let Some(version) = options.version {
        if !(MIN_SYMBOL_VERSION..=MAX_SYMBOL_VERSION).contains(&version) {
            return Err(GridError::InvalidVersion { version });
        }
    }

    let level = options.error_correction.ec_level();

    let code = match segment_kind(options.mode) {
        None => match options.version {
            Some(version) => QrCode::with_version(
                message.as_bytes(),
                Version::Normal(i16::from(version)),
                level,
            )?,
            None => QrCode::with_error_correction_level(message.as_bytes(), level)?,
        },
        Some(kind) => {
            check_payload(kind, message)?;
            match options.version {
                Some(version) => encode_segment(message, kind, i16::from(version), level)?,
                None => smallest_fitting_version(message, kind, level)?,
            }
        }
    };

    grid_from_code(&code)
}

/// Segment kind behind an explicit encoding mode.
#[derive(Debug, Clone, Copy)]
enum SegmentKind {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
}

impl SegmentKind {
    fn label(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Alphanumeric => "alphanumeric",
            Self::Byte => "binary",
            Self::Kanji => "kanji",
        }
    }
}

fn segment_kind(mode: EncodeMode) -> Option<SegmentKind> {
    match mode {
        EncodeMode::Automatic => None,
        EncodeMode::Numeric => Some(SegmentKind::Numeric),
        EncodeMode::Alphanumeric => Some(SegmentKind::Alphanumeric),
        EncodeMode::Binary => Some(SegmentKind::Byte),
        EncodeMode::Kanji => Some(SegmentKind::Kanji),
    }
}

/// Characters accepted by the alphanumeric mode (QR Model 2 table 5).
const ALPHANUMERIC_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Screens the payload against the chosen segment's character set.
///
/// Byte and kanji payloads go through unscreened; the collaborator
/// validates kanji byte pairs itself.
fn check_payload(kind: SegmentKind, message: &str) -> Result<(), GridError> {
    let valid = match kind {
        SegmentKind::Numeric => message.bytes().all(|b| b.is_ascii_digit()),
        SegmentKind::Alphanumeric => message
            .bytes()
            .all(|b| ALPHANUMERIC_CHARSET.contains(&b)),
        SegmentKind::Byte | SegmentKind::Kanji => true,
    };

    if valid {
        Ok(())
    } else {
        Err(GridError::InvalidMessage { mode: kind.label() })
    }
}

/// Encodes a single segment of the given kind at a pinned version.
fn encode_segment(
    message: &str,
    kind: SegmentKind,
    version: i16,
    level: EcLevel,
) -> Result<QrCode, QrError> {
    let mut bits = Bits::new(Version::Normal(version));
    match kind {
        SegmentKind::Numeric => bits.push_numeric_data(message.as_bytes())?,
        SegmentKind::Alphanumeric => bits.push_alphanumeric_data(message.as_bytes())?,
        SegmentKind::Byte => bits.push_byte_data(message.as_bytes())?,
        SegmentKind::Kanji => bits.push_kanji_data(message.as_bytes())?,
    }
    bits.push_terminator(level)?;
    QrCode::with_bits(bits, level)
}

/// Scans versions 1–40 for the smallest symbol that fits the segment.
fn smallest_fitting_version(
    message: &str,
    kind: SegmentKind,
    level: EcLevel,
) -> Result<QrCode, QrError> {
    let mut last = QrError::DataTooLong;
    for version in MIN_SYMBOL_VERSION..=MAX_SYMBOL_VERSION {
        match encode_segment(message, kind, i16::from(version), level) {
            Ok(code) => return Ok(code),
            Err(err) => last = err,
        }
    }
    Err(last)
}

/// Reads the collaborator's module matrix into a grid.
fn grid_from_code(code: &QrCode) -> Result<BinaryGrid, GridError> {
    let width = code.width();
    let colors = code.to_colors();
    let rows = (0..width)
        .map(|y| {
            (0..width)
                .map(|x| colors[y * width + x] == Color::Dark)
                .collect()
        })
        .collect();
    BinaryGrid::from_rows(rows)
}

// =============================================================================
// TESTS
// =============================================================================
