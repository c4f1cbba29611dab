//! Font metrics for text measurement. The serializer lays text out against
//! per-character advance widths in 1/1000 em units, either from the built-in
//! Helvetica tables or from the `head`/`maxp`/`hhea`/`hmtx`/`cmap` tables of
//! a custom TrueType font.

#[derive(thiserror::Error, Debug)]
pub enum FontError {
    #[error("font table {0} is missing")]
    MissingTable(&'static str),
    #[error("malformed font: {0}")]
    Malformed(&'static str),
    #[error("unsupported font: {0}")]
    Unsupported(&'static str),
}

// Helvetica AFM advance widths for the printable ASCII range.
#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Advance width of `c` in 1/1000 em. Characters outside the tabulated
/// ASCII range get a representative default.
#[must_use]
pub fn helvetica_width(c: char, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    match u32::from(c).checked_sub(32) {
        Some(index) if (index as usize) < table.len() => table[index as usize],
        _ => 556,
    }
}

/// Metrics needed by a PDF font descriptor, in 1/1000 em.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMetrics {
    pub ascent: i32,
    pub descent: i32,
    pub bbox: [i32; 4],
}

/// A parsed TrueType font. Holds the raw file for embedding plus the
/// advance widths and character map needed for layout.
pub struct TrueTypeFont {
    data: Vec<u8>,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    bbox: [i16; 4],
    advance_widths: Vec<u16>,
    cmap: CharacterMap,
}

struct CharacterMap {
    end_codes: Vec<u16>,
    start_codes: Vec<u16>,
    id_deltas: Vec<u16>,
    id_range_offsets: Vec<u16>,
    // glyph id array trailing the format 4 subtable
    glyph_ids: Vec<u16>,
}

fn read_u16(data: &[u8], offset: usize) -> Result<u16, FontError> {
    data.get(offset..offset + 2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
        .ok_or(FontError::Malformed("unexpected end of data"))
}

fn read_i16(data: &[u8], offset: usize) -> Result<i16, FontError> {
    read_u16(data, offset).map(|v| v as i16)
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32, FontError> {
    data.get(offset..offset + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or(FontError::Malformed("unexpected end of data"))
}

impl TrueTypeFont {
    pub fn parse(data: Vec<u8>) -> Result<Self, FontError> {
        let version = read_u32(&data, 0)?;
        if version != 0x0001_0000 && version != u32::from_be_bytes(*b"true") {
            return Err(FontError::Unsupported("not a TrueType outline font"));
        }
        let table_count = read_u16(&data, 4)?;
        let table = |tag: &'static [u8; 4]| -> Result<usize, FontError> {
            for index in 0..usize::from(table_count) {
                let record = 12 + index * 16;
                if data.get(record..record + 4) == Some(tag) {
                    return usize::try_from(read_u32(&data, record + 8)?)
                        .map_err(|_| FontError::Malformed("table offset"));
                }
            }
            Err(FontError::MissingTable(match tag {
                b"head" => "head",
                b"maxp" => "maxp",
                b"hhea" => "hhea",
                b"hmtx" => "hmtx",
                b"cmap" => "cmap",
                _ => "unknown",
            }))
        };

        let head = table(b"head")?;
        let units_per_em = read_u16(&data, head + 18)?;
        if units_per_em == 0 {
            return Err(FontError::Malformed("unitsPerEm is zero"));
        }
        let bbox = [
            read_i16(&data, head + 36)?,
            read_i16(&data, head + 38)?,
            read_i16(&data, head + 40)?,
            read_i16(&data, head + 42)?,
        ];

        let maxp = table(b"maxp")?;
        let glyph_count = usize::from(read_u16(&data, maxp + 4)?);

        let hhea = table(b"hhea")?;
        let ascender = read_i16(&data, hhea + 4)?;
        let descender = read_i16(&data, hhea + 6)?;
        let metric_count = usize::from(read_u16(&data, hhea + 34)?);
        if metric_count == 0 || metric_count > glyph_count {
            return Err(FontError::Malformed("numberOfHMetrics"));
        }

        let hmtx = table(b"hmtx")?;
        let mut advance_widths = Vec::with_capacity(glyph_count);
        for index in 0..metric_count {
            advance_widths.push(read_u16(&data, hmtx + index * 4)?);
        }
        // glyphs past numberOfHMetrics repeat the last advance
        advance_widths.resize(glyph_count, *advance_widths.last().unwrap_or(&0));

        let cmap = Self::parse_cmap(&data, table(b"cmap")?)?;

        Ok(Self {
            data,
            units_per_em,
            ascender,
            descender,
            bbox,
            advance_widths,
            cmap,
        })
    }

    fn parse_cmap(data: &[u8], cmap: usize) -> Result<CharacterMap, FontError> {
        let table_count = read_u16(data, cmap + 2)?;
        let mut subtable = None;
        for index in 0..usize::from(table_count) {
            let record = cmap + 4 + index * 8;
            let platform = read_u16(data, record)?;
            let encoding = read_u16(data, record + 2)?;
            let offset = usize::try_from(read_u32(data, record + 4)?)
                .map_err(|_| FontError::Malformed("cmap offset"))?;
            // Windows Unicode BMP, or any Unicode platform table
            if (platform == 3 && encoding == 1) || platform == 0 {
                subtable = Some(cmap + offset);
                if platform == 3 {
                    break;
                }
            }
        }
        let subtable = subtable.ok_or(FontError::Unsupported("no Unicode character map"))?;
        if read_u16(data, subtable)? != 4 {
            return Err(FontError::Unsupported("character map is not format 4"));
        }
        let length = usize::from(read_u16(data, subtable + 2)?);
        let segment_count = usize::from(read_u16(data, subtable + 6)?) / 2;
        let read_array = |offset: usize| -> Result<Vec<u16>, FontError> {
            (0..segment_count)
                .map(|i| read_u16(data, offset + i * 2))
                .collect()
        };
        let end_codes = read_array(subtable + 14)?;
        let start_codes = read_array(subtable + 16 + segment_count * 2)?;
        let id_deltas = read_array(subtable + 16 + segment_count * 4)?;
        let id_range_offsets_at = subtable + 16 + segment_count * 6;
        let id_range_offsets = read_array(id_range_offsets_at)?;
        let glyph_ids_at = id_range_offsets_at + segment_count * 2;
        let glyph_id_count = (subtable + length).saturating_sub(glyph_ids_at) / 2;
        let glyph_ids = (0..glyph_id_count)
            .map(|i| read_u16(data, glyph_ids_at + i * 2))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CharacterMap {
            end_codes,
            start_codes,
            id_deltas,
            id_range_offsets,
            glyph_ids,
        })
    }

    fn glyph_id(&self, c: char) -> u16 {
        let Ok(code) = u16::try_from(u32::from(c)) else {
            return 0;
        };
        let Some(segment) = self.cmap.end_codes.iter().position(|&end| code <= end) else {
            return 0;
        };
        if self.cmap.start_codes[segment] > code {
            return 0;
        }
        let range_offset = self.cmap.id_range_offsets[segment];
        if range_offset == 0 {
            return code.wrapping_add(self.cmap.id_deltas[segment]);
        }
        // the range offset is relative to its own position within the table
        let index = usize::from(range_offset) / 2 + usize::from(code - self.cmap.start_codes[segment])
            - (self.cmap.id_range_offsets.len() - segment);
        match self.cmap.glyph_ids.get(index) {
            Some(0) | None => 0,
            Some(&glyph) => glyph.wrapping_add(self.cmap.id_deltas[segment]),
        }
    }

    /// Advance width of `c` in 1/1000 em. Unmapped characters measure as
    /// the missing glyph.
    #[must_use]
    pub fn width(&self, c: char) -> u16 {
        let advance = self
            .advance_widths
            .get(usize::from(self.glyph_id(c)))
            .copied()
            .unwrap_or(0);
        let scaled = u32::from(advance) * 1000 / u32::from(self.units_per_em);
        u16::try_from(scaled).unwrap_or(u16::MAX)
    }

    #[must_use]
    pub fn metrics(&self) -> FontMetrics {
        let scale = |value: i16| i32::from(value) * 1000 / i32::from(self.units_per_em);
        FontMetrics {
            ascent: scale(self.ascender),
            descent: scale(self.descender),
            bbox: [
                scale(self.bbox[0]),
                scale(self.bbox[1]),
                scale(self.bbox[2]),
                scale(self.bbox[3]),
            ],
        }
    }

    /// The raw font file, embedded as the PDF `FontFile2` stream.
    #[must_use]
    pub fn file(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn push_u16(buffer: &mut Vec<u8>, value: u16) {
        buffer.extend_from_slice(&value.to_be_bytes());
    }

    // A minimal font: glyphs 0..=3, 'A'..='C' mapped to glyphs 1..=3,
    // 2048 units per em.
    fn sample_font() -> Vec<u8> {
        let mut head = vec![0; 54];
        head[18..20].copy_from_slice(&2048u16.to_be_bytes());
        head[36..38].copy_from_slice(&(-100i16).to_be_bytes());
        head[38..40].copy_from_slice(&(-400i16).to_be_bytes());
        head[40..42].copy_from_slice(&2000i16.to_be_bytes());
        head[42..44].copy_from_slice(&1800i16.to_be_bytes());

        let mut maxp = vec![0; 6];
        maxp[4..6].copy_from_slice(&4u16.to_be_bytes());

        let mut hhea = vec![0; 36];
        hhea[4..6].copy_from_slice(&1638i16.to_be_bytes());
        hhea[6..8].copy_from_slice(&(-410i16).to_be_bytes());
        hhea[34..36].copy_from_slice(&3u16.to_be_bytes());

        let mut hmtx = vec![];
        for advance in [512u16, 1024, 1126] {
            push_u16(&mut hmtx, advance);
            push_u16(&mut hmtx, 0);
        }

        let mut cmap = vec![];
        push_u16(&mut cmap, 0); // version
        push_u16(&mut cmap, 1); // table count
        push_u16(&mut cmap, 3); // platform
        push_u16(&mut cmap, 1); // encoding
        cmap.extend_from_slice(&12u32.to_be_bytes());
        // format 4 subtable: ['A'-'C'] and the final 0xFFFF segment
        push_u16(&mut cmap, 4);
        push_u16(&mut cmap, 32); // length
        push_u16(&mut cmap, 0); // language
        push_u16(&mut cmap, 4); // segCountX2
        push_u16(&mut cmap, 4);
        push_u16(&mut cmap, 1);
        push_u16(&mut cmap, 0);
        for end in [0x43u16, 0xFFFF] {
            push_u16(&mut cmap, end);
        }
        push_u16(&mut cmap, 0); // reserved
        for start in [0x41u16, 0xFFFF] {
            push_u16(&mut cmap, start);
        }
        for delta in [1u16.wrapping_sub(0x41), 1] {
            push_u16(&mut cmap, delta);
        }
        for range_offset in [0u16, 0] {
            push_u16(&mut cmap, range_offset);
        }

        let tables: [(&[u8; 4], Vec<u8>); 5] = [
            (b"cmap", cmap),
            (b"head", head),
            (b"hhea", hhea),
            (b"hmtx", hmtx),
            (b"maxp", maxp),
        ];
        let mut data = vec![];
        data.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        push_u16(&mut data, 5);
        push_u16(&mut data, 0);
        push_u16(&mut data, 0);
        push_u16(&mut data, 0);
        let mut offset = 12 + tables.len() * 16;
        for (tag, body) in &tables {
            data.extend_from_slice(*tag);
            data.extend_from_slice(&[0; 4]);
            data.extend_from_slice(&u32::try_from(offset).unwrap().to_be_bytes());
            data.extend_from_slice(&u32::try_from(body.len()).unwrap().to_be_bytes());
            offset += body.len();
        }
        for (_, body) in &tables {
            data.extend_from_slice(body);
        }
        data
    }

    #[test]
    fn test_helvetica_widths() {
        assert_eq!(helvetica_width(' ', false), 278);
        assert_eq!(helvetica_width('W', false), 944);
        assert_eq!(helvetica_width('i', false), 222);
        assert_eq!(helvetica_width('i', true), 278);
        assert_eq!(helvetica_width('é', false), 556);
    }

    #[test]
    fn test_truetype_widths() {
        let font = TrueTypeFont::parse(sample_font()).unwrap();
        // 1024 font units at 2048 upem is half an em
        assert_eq!(font.width('A'), 500);
        assert_eq!(font.width('B'), 549);
        assert_eq!(font.width('C'), 549);
        // unmapped characters take glyph 0
        assert_eq!(font.width('Z'), 250);
    }

    #[test]
    fn test_truetype_metrics() {
        let metrics = TrueTypeFont::parse(sample_font()).unwrap().metrics();
        assert_eq!(metrics.ascent, 799);
        assert_eq!(metrics.descent, -200);
        assert_eq!(metrics.bbox, [-48, -195, 976, 878]);
    }

    #[test]
    fn test_not_a_font() {
        assert!(matches!(
            TrueTypeFont::parse(b"OTTO....".to_vec()),
            Err(FontError::Unsupported(_))
        ));
    }

    #[test]
    fn test_missing_table() {
        let mut data = vec![];
        data.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        data.extend_from_slice(&[0; 8]);
        assert!(matches!(
            TrueTypeFont::parse(data),
            Err(FontError::MissingTable("head"))
        ));
    }
}
