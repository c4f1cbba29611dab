//! Single-purpose PDF 1.4 serializer for the fixed plan layout. A4 pages,
//! built-in Helvetica/Helvetica-Bold with WinAnsi encoding, an optional
//! embedded TrueType font, image XObjects passed through compressed. Text
//! is wrapped and paginated against the font width metrics; the xref table
//! and trailer are emitted last.

use std::fmt::Write as _;

use crate::{
    font::helvetica_width,
    image::{Image, ImageFormat},
    model::{Document, ExerciseRow, Field, Section, Style},
};

#[derive(thiserror::Error, Debug)]
pub enum PdfError {
    #[error("document has no sections")]
    NoSections,
}

const PAGE_WIDTH: f64 = 595.28;
const PAGE_HEIGHT: f64 = 841.89;
const MARGIN: f64 = 40.0;
const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
// keeps body text clear of the footer
const BOTTOM_LIMIT: f64 = MARGIN + 30.0;

const DARK: (u8, u8, u8) = (0x1F, 0x29, 0x37);
const GRAY: (u8, u8, u8) = (0x9C, 0xA3, 0xAF);
const SLATE: (u8, u8, u8) = (0x37, 0x41, 0x51);
const MUTED: (u8, u8, u8) = (0x6B, 0x72, 0x80);
const BADGE_BG: (u8, u8, u8) = (0xE5, 0xE7, 0xEB);
const NOTE_BLUE: (u8, u8, u8) = (0x1E, 0x40, 0xAF);
const WHITE: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);

pub fn serialize(document: &Document) -> Result<Vec<u8>, PdfError> {
    if document.sections().is_empty() {
        return Err(PdfError::NoSections);
    }
    let contents = Composer::compose(document);
    Ok(assemble(document, &contents))
}

// characters of the 0x80..0x9F WinAnsi window that differ from Unicode
static WINANSI_EXTRAS: [(char, u8); 27] = [
    ('\u{20AC}', 0x80),
    ('\u{201A}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201E}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8A),
    ('\u{2039}', 0x8B),
    ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9A),
    ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C),
    ('\u{017E}', 0x9E),
    ('\u{0178}', 0x9F),
];

fn winansi_byte(c: char) -> Option<u8> {
    match u32::from(c) {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => Some(code as u8),
        _ => WINANSI_EXTRAS
            .iter()
            .find(|&&(extra, _)| extra == c)
            .map(|&(_, byte)| byte),
    }
}

fn winansi_char(byte: u8) -> Option<char> {
    match byte {
        0x20..=0x7E | 0xA0..=0xFF => char::from_u32(u32::from(byte)),
        _ => WINANSI_EXTRAS
            .iter()
            .find(|&&(_, extra)| extra == byte)
            .map(|&(c, _)| c),
    }
}

/// PDF string literal body: WinAnsi bytes with delimiters escaped and
/// non-ASCII bytes in octal. Unencodable characters degrade to `?`.
fn encode_text(text: &str) -> String {
    let mut encoded = String::new();
    for c in text.chars() {
        match winansi_byte(c) {
            Some(byte @ (b'(' | b')' | b'\\')) => {
                encoded.push('\\');
                encoded.push(char::from(byte));
            }
            Some(byte @ 0x20..=0x7E) => encoded.push(char::from(byte)),
            Some(byte) => {
                let _ = write!(encoded, "\\{byte:03o}");
            }
            None => encoded.push('?'),
        }
    }
    encoded
}

fn fill_color(color: (u8, u8, u8)) -> String {
    format!(
        "{:.3} {:.3} {:.3} rg",
        f64::from(color.0) / 255.0,
        f64::from(color.1) / 255.0,
        f64::from(color.2) / 255.0
    )
}

fn stroke_color(color: (u8, u8, u8)) -> String {
    format!(
        "{:.3} {:.3} {:.3} RG",
        f64::from(color.0) / 255.0,
        f64::from(color.1) / 255.0,
        f64::from(color.2) / 255.0
    )
}

struct Composer<'a> {
    style: &'a Style,
    pages: Vec<String>,
    page: String,
    y: f64,
}

impl<'a> Composer<'a> {
    fn compose(document: &'a Document) -> Vec<String> {
        let mut composer = Self {
            style: &document.style,
            pages: vec![],
            page: String::new(),
            y: PAGE_HEIGHT - MARGIN,
        };
        let mut footer = None;
        let mut heading_pending = true;
        for section in document.sections() {
            match section {
                Section::Header { gym_name, title } => composer.header(gym_name, title),
                Section::PlayerInfo {
                    title,
                    fields,
                    total_label,
                    total,
                } => composer.player_info(title, fields, total_label, *total),
                Section::CategoryBlock {
                    title,
                    days,
                    exercises,
                } => {
                    if heading_pending {
                        composer.section_title(&document.exercises_title);
                        heading_pending = false;
                    }
                    composer.category_block(title, days, exercises);
                }
                Section::Notes { title, text } => composer.notes(title, text),
                Section::Footer { left, right } => footer = Some((left, right)),
            }
        }
        let last = std::mem::take(&mut composer.page);
        composer.pages.push(last);
        if let Some((left, right)) = footer {
            let ops = composer.footer_ops(left, right);
            for page in &mut composer.pages {
                page.push_str(&ops);
            }
        }
        composer.pages
    }

    fn char_width(&self, c: char, bold: bool) -> f64 {
        match &self.style.font {
            Some(font) => f64::from(font.width(c)),
            None => f64::from(helvetica_width(c, bold)),
        }
    }

    fn width(&self, text: &str, bold: bool, size: f64) -> f64 {
        text.chars().map(|c| self.char_width(c, bold)).sum::<f64>() * size / 1000.0
    }

    /// Greedy word wrap. A word longer than the line keeps its own line.
    fn wrap(&self, text: &str, bold: bool, size: f64, max_width: f64) -> Vec<String> {
        let mut lines = vec![];
        let mut line = String::new();
        for word in text.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if self.width(&candidate, bold, size) <= max_width || line.is_empty() {
                line = candidate;
            } else {
                lines.push(line);
                line = word.to_string();
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }

    fn font_name(&self, bold: bool) -> &'static str {
        if self.style.font.is_some() {
            "F3"
        } else if bold {
            "F2"
        } else {
            "F1"
        }
    }

    fn text(&mut self, x: f64, y: f64, text: &str, bold: bool, size: f64, color: (u8, u8, u8)) {
        let _ = writeln!(
            self.page,
            "BT /{} {size:.2} Tf {} {x:.2} {y:.2} Td ({}) Tj ET",
            self.font_name(bold),
            fill_color(color),
            encode_text(text)
        );
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: (u8, u8, u8)) {
        let _ = writeln!(
            self.page,
            "{} {x:.2} {y:.2} {width:.2} {height:.2} re f",
            fill_color(color)
        );
    }

    fn rule(&mut self, y: f64, weight: f64, color: (u8, u8, u8)) {
        let _ = writeln!(
            self.page,
            "{} {weight:.2} w {MARGIN:.2} {y:.2} m {:.2} {y:.2} l S",
            stroke_color(color),
            PAGE_WIDTH - MARGIN
        );
    }

    fn ensure_room(&mut self, height: f64) {
        if self.y - height < BOTTOM_LIMIT {
            let page = std::mem::take(&mut self.page);
            self.pages.push(page);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn header(&mut self, gym_name: &str, title: &str) {
        let mut x = MARGIN;
        if self.style.logo.is_some() {
            let _ = writeln!(
                self.page,
                "q 40 0 0 40 {MARGIN:.2} {:.2} cm /Im0 Do Q",
                self.y - 40.0
            );
            x += 50.0;
        }
        self.text(x, self.y - 20.0, gym_name, true, 20.0, DARK);
        let accent = self.style.accent;
        self.text(x, self.y - 42.0, title, true, 16.0, accent);
        self.rule(self.y - 54.0, 2.0, accent);
        self.y -= 74.0;
    }

    fn section_title(&mut self, title: &str) {
        self.ensure_room(44.0);
        let accent = self.style.accent;
        self.text(MARGIN, self.y - 14.0, title, true, 14.0, accent);
        self.rule(self.y - 20.0, 1.0, accent);
        self.y -= 34.0;
    }

    fn player_info(&mut self, title: &str, fields: &[Field], total_label: &str, total: usize) {
        self.section_title(title);
        self.ensure_room(50.0);
        let columns = fields.len() + 1;
        #[allow(clippy::cast_precision_loss)]
        let column_width = CONTENT_WIDTH / columns as f64;
        for (index, field) in fields.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = MARGIN + index as f64 * column_width;
            self.text(x, self.y - 10.0, &field.label, true, 8.0, GRAY);
            self.text(x, self.y - 26.0, &field.value, true, 10.0, DARK);
        }
        #[allow(clippy::cast_precision_loss)]
        let x = MARGIN + (columns - 1) as f64 * column_width;
        self.text(x, self.y - 10.0, total_label, true, 8.0, GRAY);
        let badge = total.to_string();
        let badge_width = self.width(&badge, true, 10.0) + 12.0;
        let accent = self.style.accent;
        self.rect(x, self.y - 31.0, badge_width, 16.0, accent);
        self.text(x + 6.0, self.y - 27.0, &badge, true, 10.0, WHITE);
        self.y -= 50.0;
    }

    fn category_block(&mut self, title: &str, days: &str, exercises: &[ExerciseRow]) {
        self.ensure_room(50.0);
        let accent = self.style.accent;
        self.text(MARGIN, self.y - 12.0, title, true, 12.0, accent);
        self.y -= 18.0;
        self.text(MARGIN, self.y - 10.0, days, false, 10.0, SLATE);
        self.y -= 18.0;
        for row in exercises {
            self.exercise_row(row);
        }
        self.y -= 8.0;
    }

    fn exercise_row(&mut self, row: &ExerciseRow) {
        self.ensure_room(34.0);
        let accent = self.style.accent;
        self.text(
            MARGIN + 4.0,
            self.y - 11.0,
            &row.number.to_string(),
            true,
            11.0,
            accent,
        );
        let x = MARGIN + 24.0;
        self.text(x, self.y - 11.0, &row.name, true, 11.0, DARK);
        self.y -= 16.0;

        let mut badge_x = x;
        for badge in &row.badges {
            let width = self.width(badge, false, 8.0) + 8.0;
            self.rect(badge_x, self.y - 11.0, width, 12.0, BADGE_BG);
            self.text(badge_x + 4.0, self.y - 8.0, badge, false, 8.0, SLATE);
            badge_x += width + 4.0;
        }
        self.y -= 16.0;

        if let Some(description) = &row.description {
            for line in self.wrap(description, false, 9.0, CONTENT_WIDTH - 24.0) {
                self.ensure_room(12.0);
                self.text(x, self.y - 9.0, &line, false, 9.0, MUTED);
                self.y -= 12.0;
            }
        }
        if let Some(note) = &row.note {
            for line in self.wrap(note, false, 8.0, CONTENT_WIDTH - 24.0) {
                self.ensure_room(11.0);
                self.text(x, self.y - 8.0, &line, false, 8.0, NOTE_BLUE);
                self.y -= 11.0;
            }
        }
        self.y -= 6.0;
    }

    fn notes(&mut self, title: &str, text: &str) {
        self.section_title(title);
        for line in self.wrap(text, false, 11.0, CONTENT_WIDTH) {
            self.ensure_room(14.0);
            self.text(MARGIN, self.y - 11.0, &line, false, 11.0, DARK);
            self.y -= 14.0;
        }
        self.y -= 8.0;
    }

    fn footer_ops(&self, left: &str, right: &str) -> String {
        let mut ops = String::new();
        let _ = writeln!(
            ops,
            "{} 1.00 w {MARGIN:.2} 50.00 m {:.2} 50.00 l S",
            stroke_color(BADGE_BG),
            PAGE_WIDTH - MARGIN
        );
        let _ = writeln!(
            ops,
            "BT /{} 8.00 Tf {} {MARGIN:.2} 38.00 Td ({}) Tj ET",
            self.font_name(false),
            fill_color(GRAY),
            encode_text(left)
        );
        let right_x = PAGE_WIDTH - MARGIN - self.width(right, false, 8.0);
        let _ = writeln!(
            ops,
            "BT /{} 8.00 Tf {} {right_x:.2} 38.00 Td ({}) Tj ET",
            self.font_name(false),
            fill_color(GRAY),
            encode_text(right)
        );
        ops
    }
}

fn assemble(document: &Document, contents: &[String]) -> Vec<u8> {
    let page_count = contents.len();
    let first_page = 3;
    let first_content = first_page + page_count;
    let f1 = first_content + page_count;
    let f2 = f1 + 1;
    let mut next = f2 + 1;
    let custom_font = document.style.font.as_ref().map(|font| {
        let numbers = (next, next + 1, next + 2);
        next += 3;
        (font, numbers)
    });
    let logo = document.style.logo.as_ref().map(|image| {
        let number = next;
        next += 1;
        (image, number)
    });

    let mut font_resources = format!("/F1 {f1} 0 R /F2 {f2} 0 R");
    if let Some((_, (f3, _, _))) = custom_font {
        let _ = write!(font_resources, " /F3 {f3} 0 R");
    }
    let mut resources = format!("/Font << {font_resources} >>");
    if let Some((_, number)) = logo {
        let _ = write!(resources, " /XObject << /Im0 {number} 0 R >>");
    }

    let mut objects: Vec<Vec<u8>> = vec![];
    objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
    let kids = (0..page_count)
        .map(|index| format!("{} 0 R", first_page + index))
        .collect::<Vec<_>>()
        .join(" ");
    objects.push(
        format!("<< /Type /Pages /Kids [{kids}] /Count {page_count} >>").into_bytes(),
    );
    for index in 0..page_count {
        objects.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.2} {PAGE_HEIGHT:.2}] \
                 /Resources << {resources} >> /Contents {} 0 R >>",
                first_content + index
            )
            .into_bytes(),
        );
    }
    for content in contents {
        objects.push(stream(
            &format!("<< /Length {} >>", content.len()),
            content.as_bytes(),
        ));
    }
    objects.push(
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_vec(),
    );
    objects.push(
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_vec(),
    );
    if let Some((font, (_, descriptor, file))) = custom_font {
        let widths = (0x20..=0xFFu8)
            .map(|byte| {
                winansi_char(byte)
                    .map(|c| font.width(c))
                    .unwrap_or(0)
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join(" ");
        objects.push(
            format!(
                "<< /Type /Font /Subtype /TrueType /BaseFont /CustomFont /FirstChar 32 \
                 /LastChar 255 /Widths [{widths}] /Encoding /WinAnsiEncoding \
                 /FontDescriptor {descriptor} 0 R >>"
            )
            .into_bytes(),
        );
        let metrics = font.metrics();
        objects.push(
            format!(
                "<< /Type /FontDescriptor /FontName /CustomFont /Flags 32 \
                 /FontBBox [{} {} {} {}] /ItalicAngle 0 /Ascent {} /Descent {} \
                 /CapHeight {} /StemV 80 /FontFile2 {file} 0 R >>",
                metrics.bbox[0],
                metrics.bbox[1],
                metrics.bbox[2],
                metrics.bbox[3],
                metrics.ascent,
                metrics.descent,
                metrics.ascent
            )
            .into_bytes(),
        );
        objects.push(stream(
            &format!(
                "<< /Length {} /Length1 {} >>",
                font.file().len(),
                font.file().len()
            ),
            font.file(),
        ));
    }
    if let Some((image, _)) = logo {
        objects.push(image_object(image));
    }

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = vec![];
    for (index, object) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend(format!("{} 0 obj\n", index + 1).into_bytes());
        out.extend_from_slice(object);
        out.extend_from_slice(b"\nendobj\n");
    }
    let xref_at = out.len();
    out.extend(format!("xref\n0 {}\n", objects.len() + 1).into_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend(format!("{offset:010} 00000 n \n").into_bytes());
    }
    out.extend(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        )
        .into_bytes(),
    );
    out
}

fn stream(dict: &str, data: &[u8]) -> Vec<u8> {
    let mut object = dict.as_bytes().to_vec();
    object.extend_from_slice(b"\nstream\n");
    object.extend_from_slice(data);
    object.extend_from_slice(b"\nendstream");
    object
}

fn image_object(image: &Image) -> Vec<u8> {
    let color_space = if image.channels == 1 {
        "/DeviceGray"
    } else {
        "/DeviceRGB"
    };
    let filter = match image.format {
        ImageFormat::Jpeg => "/Filter /DCTDecode".to_string(),
        ImageFormat::Png => format!(
            "/Filter /FlateDecode /DecodeParms << /Predictor 15 /Colors {} \
             /BitsPerComponent 8 /Columns {} >>",
            image.channels, image.width
        ),
    };
    stream(
        &format!(
            "<< /Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace {color_space} \
             /BitsPerComponent 8 {filter} /Length {} >>",
            image.width,
            image.height,
            image.data.len()
        ),
        &image.data,
    )
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use liftplan_domain::{
        CategoryGroup, Exercise, GymSettings, Name, Prescription, Sets, Weekday, WorkoutPlan,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .filter(|window| *window == needle)
            .count()
    }

    fn prescription(id: u128, name: &str) -> Prescription {
        Prescription {
            exercise: Exercise {
                id: id.into(),
                name: Name::new(name).unwrap(),
                category: Name::new("chest").unwrap(),
                description: Some("Keep the shoulder blades retracted".to_string()),
                created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            },
            sets: Sets::new(4).unwrap(),
            reps: Some("8-10".to_string()),
            weight: Some("60kg".to_string()),
            notes: None,
        }
    }

    fn plan(exercises_per_group: usize) -> WorkoutPlan {
        WorkoutPlan {
            id: 1.into(),
            player_id: 1.into(),
            player_name: Name::new("Jane Doe").unwrap(),
            categories: vec![CategoryGroup {
                category: Name::new("chest").unwrap(),
                days: vec![Weekday::Monday, Weekday::Thursday],
                exercises: (0..exercises_per_group)
                    .map(|index| prescription(index as u128 + 1, "Bench Press"))
                    .collect(),
            }],
            date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            notes: Some("Deload (week 5) next".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 6, 10, 30, 15).unwrap(),
        }
    }

    fn pdf(plan: &WorkoutPlan, settings: &GymSettings) -> Vec<u8> {
        serialize(&Document::styled(plan, settings).unwrap()).unwrap()
    }

    #[test]
    fn test_file_markers() {
        let bytes = pdf(&plan(1), &GymSettings::default());
        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_xref_covers_every_object() {
        let bytes = pdf(&plan(1), &GymSettings::default());
        let object_count = count(&bytes, b" 0 obj\n");
        let text = String::from_utf8_lossy(&bytes);
        let size = text
            .split("/Size ")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|size| size.parse::<usize>().ok())
            .unwrap();
        assert_eq!(size, object_count + 1);
        // one xref entry per object plus the free-list head
        assert_eq!(count(&bytes, b" 00000 n \n"), object_count);
    }

    #[test]
    fn test_text_is_searchable() {
        let bytes = pdf(&plan(1), &GymSettings::default());
        assert!(contains(&bytes, b"(Jane Doe)"));
        assert!(contains(&bytes, b"(Workout Plan)"));
        assert!(contains(&bytes, b"(CHEST)"));
        assert!(contains(&bytes, b"(Sets: 4)"));
        assert!(contains(&bytes, b"(Exercises \\(1\\))"));
    }

    #[test]
    fn test_parentheses_in_content_are_escaped() {
        let bytes = pdf(&plan(1), &GymSettings::default());
        assert!(contains(&bytes, b"(Deload \\(week 5\\) next)"));
    }

    #[test]
    fn test_single_page_for_small_plan() {
        let bytes = pdf(&plan(1), &GymSettings::default());
        assert_eq!(count(&bytes, b"/Type /Page /Parent"), 1);
        assert!(contains(&bytes, b"/Count 1"));
    }

    #[test]
    fn test_long_plan_paginates() {
        let bytes = pdf(&plan(40), &GymSettings::default());
        assert!(count(&bytes, b"/Type /Page /Parent") >= 2);
    }

    #[test]
    fn test_builtin_fonts_and_encoding() {
        let bytes = pdf(&plan(1), &GymSettings::default());
        assert!(contains(&bytes, b"/BaseFont /Helvetica "));
        assert!(contains(&bytes, b"/BaseFont /Helvetica-Bold"));
        assert!(contains(&bytes, b"/Encoding /WinAnsiEncoding"));
    }

    #[test]
    fn test_non_ascii_text_uses_octal_escapes() {
        let mut settings = GymSettings::default();
        settings.language = "de".to_string();
        let bytes = pdf(&plan(1), &settings);
        // "Übungen" with a WinAnsi 0xDC lead byte
        assert!(contains(&bytes, b"(\\334bungen"));
    }

    #[test]
    fn test_png_logo_is_embedded() {
        let mut ihdr = vec![];
        ihdr.extend_from_slice(&8u32.to_be_bytes());
        ihdr.extend_from_slice(&8u32.to_be_bytes());
        ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);
        let mut png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        for (kind, body) in [
            (*b"IHDR", ihdr),
            (*b"IDAT", vec![0x78, 0x9C, 0x01, 0x02]),
            (*b"IEND", vec![]),
        ] {
            png.extend_from_slice(&u32::try_from(body.len()).unwrap().to_be_bytes());
            png.extend_from_slice(&kind);
            png.extend_from_slice(&body);
            png.extend_from_slice(&[0; 4]);
        }
        let mut settings = GymSettings::default();
        settings.logo = Some(format!(
            "data:image/png;base64,{}",
            base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &png)
        ));

        let bytes = pdf(&plan(1), &settings);
        assert!(contains(&bytes, b"/Subtype /Image"));
        assert!(contains(&bytes, b"/FlateDecode"));
        assert!(contains(&bytes, b"/Im0 Do"));
    }
}
