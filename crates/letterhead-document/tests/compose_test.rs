// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end tests: write a logo to a scratch directory, compose the report,
// and inspect the resulting PDF with lopdf.

use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use letterhead_core::{LetterheadError, ReportConfig, Stage};
use letterhead_document::pdf::compositor::{FOOTER_TEXT, HEADING_TEXT};
use letterhead_document::{compose, compose_and_report};
use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

type Matrix = [f32; 6];

const IDENTITY: Matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

fn write_logo(dir: &Path, name: &str, image: DynamicImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

fn opaque_logo(dir: &Path) -> PathBuf {
    let img = RgbImage::from_pixel(100, 50, Rgb([200, 30, 30]));
    write_logo(dir, "logo.png", DynamicImage::ImageRgb8(img))
}

fn only_page(doc: &Document) -> ObjectId {
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1, "expected a single page");
    *pages.values().next().unwrap()
}

fn operand(obj: &Object) -> f32 {
    obj.as_float().unwrap()
}

/// `M × N` for PDF row-vector matrices.
fn multiply(m: Matrix, n: Matrix) -> Matrix {
    [
        m[0] * n[0] + m[1] * n[2],
        m[0] * n[1] + m[1] * n[3],
        m[2] * n[0] + m[3] * n[2],
        m[2] * n[1] + m[3] * n[3],
        m[4] * n[0] + m[5] * n[2] + n[4],
        m[4] * n[1] + m[5] * n[3] + n[5],
    ]
}

/// A text block: where its cursor was set and the strings it shows.
#[derive(Debug, Default)]
struct TextRun {
    x: f32,
    y: f32,
    text: String,
}

fn shown_text(obj: &Object) -> String {
    match obj {
        Object::String(bytes, _) => String::from_utf8_lossy(bytes).into_owned(),
        Object::Array(items) => items.iter().map(shown_text).collect(),
        _ => String::new(),
    }
}

/// Walk the page content and return the CTM in force at each `Do`, plus the
/// text shown inside each `BT`/`ET` block.
fn trace_page(doc: &Document, page: ObjectId) -> (Vec<Matrix>, Vec<TextRun>) {
    let bytes = doc.get_page_content(page).unwrap();
    let content = Content::decode(&bytes).unwrap();

    let mut stack = Vec::new();
    let mut ctm = IDENTITY;
    let mut draws = Vec::new();
    let mut text = Vec::new();

    for op in &content.operations {
        match op.operator.as_str() {
            "q" => stack.push(ctm),
            "Q" => ctm = stack.pop().unwrap_or(IDENTITY),
            "cm" => {
                let m: Vec<f32> = op.operands.iter().map(operand).collect();
                ctm = multiply([m[0], m[1], m[2], m[3], m[4], m[5]], ctm);
            }
            "Do" => draws.push(ctm),
            "BT" => text.push(TextRun::default()),
            "Td" => {
                if let Some(run) = text.last_mut() {
                    run.x = operand(&op.operands[0]);
                    run.y = operand(&op.operands[1]);
                }
            }
            "Tm" => {
                if let Some(run) = text.last_mut() {
                    run.x = operand(&op.operands[4]);
                    run.y = operand(&op.operands[5]);
                }
            }
            "Tj" | "TJ" | "'" => {
                if let (Some(run), Some(shown)) = (text.last_mut(), op.operands.last()) {
                    run.text.push_str(&shown_text(shown));
                }
            }
            _ => {}
        }
    }
    (draws, text)
}

fn image_xobjects(doc: &Document) -> Vec<&lopdf::Dictionary> {
    doc.objects
        .values()
        .filter_map(|obj| match obj {
            Object::Stream(stream) => Some(&stream.dict),
            _ => None,
        })
        .filter(|dict| {
            dict.get(b"Subtype")
                .and_then(|s| s.as_name())
                .is_ok_and(|name| name == b"Image")
        })
        .collect()
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.05
}

#[test]
fn opaque_logo_lands_in_top_right_corner() {
    let dir = tempfile::tempdir().unwrap();
    let logo = opaque_logo(dir.path());
    let out = dir.path().join("report.pdf");

    let resolved = compose(&logo, &out).unwrap();
    assert!(resolved.is_absolute());
    assert_eq!(resolved, std::fs::canonicalize(&out).unwrap());

    let doc = Document::load(&out).unwrap();
    let page = only_page(&doc);

    let media_box = doc
        .get_dictionary(page)
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(operand)
        .collect::<Vec<_>>();
    assert!(close(media_box[2], 612.0) && close(media_box[3], 792.0), "{media_box:?}");

    let (draws, text) = trace_page(&doc, page);
    assert_eq!(draws.len(), 1, "one image draw");
    let [a, b, c, d, e, f] = draws[0];
    assert!(close(a, 120.0) && close(d, 60.0), "size {a}x{d}");
    assert!(close(b, 0.0) && close(c, 0.0));
    assert!(close(e, 612.0 - 170.0) && close(f, 792.0 - 110.0), "at ({e}, {f})");

    assert_eq!(text.len(), 2, "heading and footer: {text:?}");
    let heading = text.iter().find(|run| run.text == HEADING_TEXT).expect("heading drawn");
    assert!(close(heading.x, 72.0) && close(heading.y, 792.0 - 140.0), "{heading:?}");
    let footer = text.iter().find(|run| run.text == FOOTER_TEXT).expect("footer drawn");
    assert!(close(footer.x, 72.0) && close(footer.y, 72.0), "{footer:?}");
}

#[test]
fn embedded_logo_keeps_natural_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let logo = opaque_logo(dir.path());
    let out = dir.path().join("report.pdf");
    compose(&logo, &out).unwrap();

    let doc = Document::load(&out).unwrap();
    let images = image_xobjects(&doc);
    assert_eq!(images.len(), 1);
    let dict = images[0];
    assert_eq!(dict.get(b"Width").unwrap().as_i64().unwrap(), 100);
    assert_eq!(dict.get(b"Height").unwrap().as_i64().unwrap(), 50);
}

#[test]
fn transparent_logo_is_embedded_without_mask() {
    let dir = tempfile::tempdir().unwrap();
    let mut img = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 0]));
    for x in 16..48 {
        for y in 16..48 {
            img.put_pixel(x, y, Rgba([0, 80, 160, 255]));
        }
    }
    let logo = write_logo(dir.path(), "logo.png", DynamicImage::ImageRgba8(img));
    let out = dir.path().join("report.pdf");
    compose(&logo, &out).unwrap();

    let doc = Document::load(&out).unwrap();
    let images = image_xobjects(&doc);
    assert_eq!(images.len(), 1);
    assert!(images[0].get(b"SMask").is_err(), "flattened logo needs no soft mask");

    let (draws, _) = trace_page(&doc, only_page(&doc));
    let [a, _, _, d, ..] = draws[0];
    assert!(close(a, 120.0) && close(d, 120.0), "square logo stays square");
}

#[test]
fn missing_logo_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("absent.png");
    let out = dir.path().join("report.pdf");

    let err = compose(&logo, &out).unwrap_err();
    assert!(matches!(err, LetterheadError::MissingAsset { ref path } if *path == logo));
    assert!(!out.exists());
}

#[test]
fn corrupt_logo_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    std::fs::write(&logo, b"\x89PNG\r\n\x1a\n but then nonsense").unwrap();
    let out = dir.path().join("report.pdf");

    let err = compose(&logo, &out).unwrap_err();
    assert_eq!(err.stage(), Stage::ImageProcessing);
    assert!(!out.exists());
}

#[test]
fn second_run_overwrites_output() {
    let dir = tempfile::tempdir().unwrap();
    let logo = opaque_logo(dir.path());
    let out = dir.path().join("report.pdf");
    std::fs::write(&out, b"stale contents from another tool").unwrap();

    compose(&logo, &out).unwrap();
    let first = Document::load(&out).unwrap();
    assert_eq!(first.get_pages().len(), 1);

    compose(&logo, &out).unwrap();
    let second = Document::load(&out).unwrap();
    assert_eq!(second.get_pages().len(), 1);
}

#[test]
fn report_prints_resolved_path_on_success() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        logo_path: opaque_logo(dir.path()),
        output_path: dir.path().join("report.pdf"),
        ..ReportConfig::default()
    };

    let mut console = Vec::new();
    let path = compose_and_report(&config, &mut console).unwrap();
    let printed = String::from_utf8(console).unwrap();
    assert!(printed.starts_with("PDF generated successfully at: "));
    assert!(printed.contains(&path.display().to_string()));
}

#[test]
fn report_names_missing_logo() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        logo_path: dir.path().join("nowhere.png"),
        output_path: dir.path().join("report.pdf"),
        ..ReportConfig::default()
    };

    let mut console = Vec::new();
    let human = compose_and_report(&config, &mut console).unwrap_err();
    assert_eq!(human.stage, Stage::SourceAsset);

    let printed = String::from_utf8(console).unwrap();
    assert!(printed.starts_with("Error: "));
    assert!(printed.contains("nowhere.png"));
    assert!(!config.output_path.exists());
}
