//! Prescription document building. Layout is a pure text pass so the
//! content contract stays testable; PDF placement via `printpdf` happens
//! only in `render`.

use std::io::BufWriter;

use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use crate::models::DocumentError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const WRAP_COLUMNS: usize = 80;

/// One line of the document, before PDF placement.
#[derive(Debug, Clone, PartialEq)]
pub struct DocLine {
    pub text: String,
    pub style: LineStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
    Footer,
    Blank,
}

impl DocLine {
    fn title(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Title }
    }

    fn heading(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Heading }
    }

    fn body(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Body }
    }

    fn footer(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Footer }
    }

    fn blank() -> Self {
        Self { text: String::new(), style: LineStyle::Blank }
    }
}

/// A single-page prescription: clinic header, patient and physician
/// sections, diagnosis line, itemized prescription list.
#[derive(Debug, Clone)]
pub struct PrescriptionDocument {
    clinic_name: String,
    patient_name: String,
    doctor_name: String,
    diagnosis: String,
    items: Vec<String>,
}

impl PrescriptionDocument {
    pub fn new(
        clinic_name: impl Into<String>,
        patient_name: impl Into<String>,
        doctor_name: impl Into<String>,
        diagnosis: impl Into<String>,
        items: Vec<String>,
    ) -> Self {
        Self {
            clinic_name: clinic_name.into(),
            patient_name: patient_name.into(),
            doctor_name: doctor_name.into(),
            diagnosis: diagnosis.into(),
            items,
        }
    }

    /// The document's text content, top to bottom. Deterministic for
    /// identical inputs and free of timestamps. An empty prescription
    /// list keeps its section heading.
    pub fn layout(&self) -> Vec<DocLine> {
        let mut lines = vec![
            DocLine::title("MEDICAL PRESCRIPTION"),
            DocLine::body(self.clinic_name.as_str()),
            DocLine::blank(),
            DocLine::heading("Patient Information:"),
            DocLine::body(format!("Name: {}", self.patient_name)),
            DocLine::blank(),
            DocLine::heading("Prescribing Physician:"),
            DocLine::body(self.doctor_name.as_str()),
            DocLine::blank(),
            DocLine::heading("Diagnosis:"),
            DocLine::body(self.diagnosis.as_str()),
            DocLine::blank(),
            DocLine::heading("Prescription:"),
        ];

        for (i, item) in self.items.iter().enumerate() {
            lines.push(DocLine::body(format!("{}. {}", i + 1, item)));
        }

        lines.push(DocLine::blank());
        lines.push(DocLine::footer(
            "This prescription is generated electronically and is valid.",
        ));

        lines
    }

    /// Render the layout into single-page A4 PDF bytes.
    pub fn render(&self) -> Result<Vec<u8>, DocumentError> {
        let (doc, page1, layer1) = PdfDocument::new(
            "Medical Prescription",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let layer = doc.get_page(page1).get_layer(layer1);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DocumentError::Render(format!("font error: {e}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DocumentError::Render(format!("font error: {e}")))?;
        let oblique = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| DocumentError::Render(format!("font error: {e}")))?;

        let mut y = Mm(PAGE_HEIGHT_MM - MARGIN_MM);
        for line in self.layout() {
            match line.style {
                LineStyle::Title => {
                    layer.use_text(&line.text, 18.0, Mm(MARGIN_MM), y, &bold);
                    y -= Mm(8.0);
                }
                LineStyle::Heading => {
                    layer.use_text(&line.text, 12.0, Mm(MARGIN_MM), y, &bold);
                    y -= Mm(6.0);
                }
                LineStyle::Body => {
                    for wrapped in wrap_text(&line.text, WRAP_COLUMNS) {
                        layer.use_text(&wrapped, 10.0, Mm(MARGIN_MM + 5.0), y, &regular);
                        y -= Mm(5.0);
                    }
                }
                LineStyle::Footer => {
                    layer.use_text(&line.text, 9.0, Mm(MARGIN_MM), Mm(15.0), &oblique);
                }
                LineStyle::Blank => {
                    y -= Mm(4.0);
                }
            }
        }

        let mut buf = BufWriter::new(Vec::new());
        doc.save(&mut buf)
            .map_err(|e| DocumentError::Render(format!("save error: {e}")))?;
        let bytes = buf
            .into_inner()
            .map_err(|e| DocumentError::Render(format!("buffer error: {e}")))?;

        debug!(
            "Rendered prescription for {} ({} bytes)",
            self.patient_name,
            bytes.len()
        );
        Ok(bytes)
    }

    /// Download filename. The embedded date is informational only and is
    /// not part of the document's correctness contract.
    pub fn download_filename(&self, now: DateTime<Utc>) -> String {
        format!(
            "prescription_{}_{}.pdf",
            self.patient_name.replace(' ', "_"),
            now.format("%Y%m%d")
        )
    }
}

fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    if text.len() <= columns {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > columns {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
