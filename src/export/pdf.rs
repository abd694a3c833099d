use crate::errors::AppResult;
use crate::export::DocumentRenderer;
use crate::export::snapshot::ReportSnapshot;
use crate::signature::Raster;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str, TextStr};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// A4 width: 210 mm in points.
pub const PAGE_WIDTH_PT: f32 = 595.28;
/// A4 height: 297 mm in points.
pub const PAGE_HEIGHT_PT: f32 = 841.89;

const SIGNATURE_WIDTH_PT: f32 = 180.0;

/// Scale `(w, h)` to `target_w` keeping the aspect ratio.
pub fn scale_to_width(w: f32, h: f32, target_w: f32) -> (f32, f32) {
    if w <= 0.0 {
        return (target_w, 0.0);
    }
    (target_w, h * target_w / w)
}

/// Encode text for a WinAnsi (cp1252) Type1 font.
///
/// Latin-1 maps to itself, `€` to 0x80, anything else becomes `?`.
pub fn winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// Single-page PDF builder for the weekly report.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // IDs are handed out manually
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id,

            page_w: PAGE_WIDTH_PT,
            page_h: PAGE_HEIGHT_PT,
            margin: 40.0,
            row_h: 20.0,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 16.0,
        }
    }

    /// Hand out a fresh unique Ref
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&winansi(text)));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, w: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey);
        content.rect(self.margin, y, w, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (text, w) in row.iter().zip(col_widths) {
            self.draw_text(content, x + 4.0, y + 6.0, font_size, text);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content, stretched to the usable width.
    fn compute_col_widths(&self, headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.width() as f32 * 6.5 + 8.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = (cell.width() as f32 * 6.2 + 8.0).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > 0.0 {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn write_image(&mut self, raster: &Raster) -> AppResult<Ref> {
        let id = self.fresh_ref();

        let mut z = ZlibEncoder::new(Vec::new(), Compression::default());
        z.write_all(raster.pixels())?;
        let data = z.finish()?;

        let mut image = self.pdf.image_xobject(id, &data);
        image.filter(Filter::FlateDecode);
        image.width(raster.width() as i32);
        image.height(raster.height() as i32);
        image.color_space().device_gray();
        image.bits_per_component(8);

        Ok(id)
    }

    /// Lay out the whole report on one page.
    pub fn write_report(&mut self, snap: &ReportSnapshot) -> AppResult<()> {
        let image_id = match &snap.signature {
            Some(raster) => Some(self.write_image(raster)?),
            None => None,
        };

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        let info_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);

            let mut resources = page.resources();
            resources.fonts().pair(Name(b"F1"), self.font_id);
            if let Some(img) = image_id {
                resources.x_objects().pair(Name(b"Im1"), img);
            }
        }

        let mut content = Content::new();
        let mut y = self.page_h - self.margin - self.title_font_size;

        // Title
        self.draw_text(&mut content, self.margin, y, self.title_font_size, &snap.title);
        y -= 28.0;

        // Name / period / week
        for (label, value) in &snap.header {
            let line = format!("{label}: {value}");
            self.draw_text(&mut content, self.margin, y, self.header_font_size, &line);
            y -= 16.0;
        }
        y -= 10.0 + self.row_h;

        // Day table
        let col_widths = self.compute_col_widths(&snap.columns, &snap.rows);
        let table_w: f32 = col_widths.iter().sum();

        self.fill_band(&mut content, y, table_w, 0.87);
        self.draw_row(
            &mut content,
            y,
            &col_widths,
            &snap.columns,
            self.header_font_size,
        );
        y -= self.row_h;

        for (i, row) in snap.rows.iter().enumerate() {
            // zebra stripe
            if i % 2 == 0 {
                self.fill_band(&mut content, y, table_w, 0.96);
            }
            self.draw_row(&mut content, y, &col_widths, row, self.font_size);
            y -= self.row_h;
        }
        y -= 10.0;

        // Totals
        for (label, value) in &snap.totals {
            let line = format!("{label}: {value}");
            self.draw_text(&mut content, self.margin, y, self.header_font_size, &line);
            y -= 16.0;
        }
        y -= 20.0;

        // Signature
        self.draw_text(&mut content, self.margin, y, self.font_size, "Unterschrift:");
        y -= 8.0;

        if let (Some(raster), Some(_)) = (&snap.signature, image_id) {
            let (w, h) = scale_to_width(
                raster.width() as f32,
                raster.height() as f32,
                SIGNATURE_WIDTH_PT,
            );
            let bottom = (y - h).max(self.margin);

            content.save_state();
            content.transform([w, 0.0, 0.0, h, self.margin, bottom]);
            content.x_object(Name(b"Im1"));
            content.restore_state();

            y = bottom - 4.0;
        } else {
            y -= 40.0;
        }

        // signature line
        content.save_state();
        content.set_stroke_rgb(0.3, 0.3, 0.3);
        content.move_to(self.margin, y);
        content.line_to(self.margin + SIGNATURE_WIDTH_PT, y);
        content.stroke();
        content.restore_state();

        self.pdf.stream(content_id, &content.finish());

        self.pdf
            .document_info(info_id)
            .title(TextStr(&snap.title))
            .creator(TextStr(concat!("wochenbericht ", env!("CARGO_PKG_VERSION"))));

        Ok(())
    }

    /// Set up the `Pages` node with count and kids
    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    /// Close the document tree and return the file bytes.
    pub fn finish(mut self) -> Vec<u8> {
        // Catalog + Pages are built once, here
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        self.pdf.finish()
    }
}

/// [`DocumentRenderer`] producing a one-page PDF.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfRenderer;

impl DocumentRenderer for PdfRenderer {
    fn render(&self, snapshot: &ReportSnapshot) -> AppResult<Vec<u8>> {
        let mut pdf = PdfManager::new();
        pdf.write_report(snapshot)?;
        Ok(pdf.finish())
    }
}
