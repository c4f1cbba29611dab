//! Logo decoding. The gym logo is stored as a base64 data URL; JPEG and
//! 8-bit non-interlaced PNG payloads are accepted and passed through to the
//! PDF serializer without re-encoding.

use base64::{Engine as _, engine::general_purpose::STANDARD};

#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    #[error("not a base64 image data URL")]
    DataUrl,
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
    #[error("malformed {0} data")]
    Malformed(&'static str),
    #[error("unsupported image: {0}")]
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFormat {
    /// Baseline or progressive JPEG, embedded with the DCT filter.
    Jpeg,
    /// PNG pixel data, embedded as the raw zlib stream with the PNG
    /// predictor declared to the PDF reader.
    Png,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    /// Color channels per pixel (1 grayscale, 3 RGB).
    pub channels: u8,
    /// The compressed payload: the whole JPEG file, or the concatenated
    /// IDAT content of the PNG.
    pub data: Vec<u8>,
}

impl Image {
    pub fn from_data_url(url: &str) -> Result<Self, ImageError> {
        let payload = url
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(_, payload)| payload)
            .ok_or(ImageError::DataUrl)?;
        let bytes = STANDARD.decode(payload.trim())?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.starts_with(&[0xFF, 0xD8]) {
            return Self::from_jpeg(bytes);
        }
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Self::from_png(bytes);
        }
        Err(ImageError::Unsupported(
            "only JPEG and PNG are accepted".to_string(),
        ))
    }

    /// Scans the segment list for the frame header to pick up the pixel
    /// dimensions. The unmodified file is the payload.
    fn from_jpeg(bytes: &[u8]) -> Result<Self, ImageError> {
        let mut offset = 2;
        loop {
            if offset + 4 > bytes.len() {
                return Err(ImageError::Malformed("JPEG"));
            }
            if bytes[offset] != 0xFF {
                return Err(ImageError::Malformed("JPEG"));
            }
            let marker = bytes[offset + 1];
            let length = usize::from(u16::from_be_bytes([bytes[offset + 2], bytes[offset + 3]]));
            match marker {
                // SOF segments other than DHT/JPG/DAC
                0xC0..=0xCF if !matches!(marker, 0xC4 | 0xC8 | 0xCC) => {
                    if offset + 10 > bytes.len() {
                        return Err(ImageError::Malformed("JPEG"));
                    }
                    let height =
                        u32::from(u16::from_be_bytes([bytes[offset + 5], bytes[offset + 6]]));
                    let width =
                        u32::from(u16::from_be_bytes([bytes[offset + 7], bytes[offset + 8]]));
                    let channels = bytes[offset + 9];
                    if !matches!(channels, 1 | 3) {
                        return Err(ImageError::Unsupported(format!(
                            "JPEG with {channels} components"
                        )));
                    }
                    return Ok(Self {
                        format: ImageFormat::Jpeg,
                        width,
                        height,
                        channels,
                        data: bytes.to_vec(),
                    });
                }
                // start of scan without a preceding frame header
                0xDA => return Err(ImageError::Malformed("JPEG")),
                _ => offset += 2 + length,
            }
        }
    }

    /// Reads IHDR and concatenates the IDAT chunks. Only 8-bit grayscale
    /// and truecolor without interlacing can be passed through to a PDF
    /// image dictionary.
    fn from_png(bytes: &[u8]) -> Result<Self, ImageError> {
        let mut offset = 8;
        let mut header: Option<(u32, u32, u8)> = None;
        let mut data = vec![];
        while offset + 8 <= bytes.len() {
            let length = usize::try_from(u32::from_be_bytes([
                bytes[offset],
                bytes[offset + 1],
                bytes[offset + 2],
                bytes[offset + 3],
            ]))
            .map_err(|_| ImageError::Malformed("PNG"))?;
            let kind = &bytes[offset + 4..offset + 8];
            let body = bytes
                .get(offset + 8..offset + 8 + length)
                .ok_or(ImageError::Malformed("PNG"))?;
            match kind {
                b"IHDR" => {
                    if length != 13 {
                        return Err(ImageError::Malformed("PNG"));
                    }
                    let width = u32::from_be_bytes([body[0], body[1], body[2], body[3]]);
                    let height = u32::from_be_bytes([body[4], body[5], body[6], body[7]]);
                    let bit_depth = body[8];
                    let color_type = body[9];
                    let interlace = body[12];
                    if bit_depth != 8 {
                        return Err(ImageError::Unsupported(format!(
                            "PNG with bit depth {bit_depth}"
                        )));
                    }
                    if interlace != 0 {
                        return Err(ImageError::Unsupported("interlaced PNG".to_string()));
                    }
                    let channels = match color_type {
                        0 => 1,
                        2 => 3,
                        _ => {
                            return Err(ImageError::Unsupported(format!(
                                "PNG color type {color_type}"
                            )));
                        }
                    };
                    header = Some((width, height, channels));
                }
                b"IDAT" => data.extend_from_slice(body),
                b"IEND" => break,
                _ => {}
            }
            offset += 12 + length;
        }
        let (width, height, channels) = header.ok_or(ImageError::Malformed("PNG"))?;
        if data.is_empty() {
            return Err(ImageError::Malformed("PNG"));
        }
        Ok(Self {
            format: ImageFormat::Png,
            width,
            height,
            channels,
            data,
        })
    }
}
