// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Raster export of the committed plan.
//!
//! The scene is re-rendered through the same `render_frame` the live canvas
//! uses, with a viewport fitted to the content bounds and grid, rulers and
//! drafts switched off. The display list is written out as SVG, rasterised
//! with resvg and encoded as PNG with the `image` crate.

use crate::config::ExportConfig;
use crate::editing::{Draft, EditSession, ViewPort};
use crate::model::Scene;
use crate::render::{DisplayList, DrawItem, FrameInput, RenderOptions, TextAnchor, render_frame};
use chrono::{DateTime, Local};
use kurbo::{Cap, Join, Rect, Size};
use peniko::Color;
use resvg::{tiny_skia, usvg};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Export failures
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: the plan is empty")]
    EmptyScene,
    #[error("failed to render export image: {0}")]
    Render(String),
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Output geometry for one export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportPlan {
    /// Padded content bounds in grid space
    pub bounds: Rect,
    /// Export pixels per grid unit
    pub scale: f64,
    pub width: u32,
    pub height: u32,
}

impl ExportPlan {
    /// Fit the scene's content into an image
    ///
    /// Starts at `pixels_per_unit`; the longest side is then raised to
    /// `min_dimension` or capped at `max_dimension`.
    pub fn for_scene(
        scene: &Scene,
        cell_size: f64,
        config: &ExportConfig,
    ) -> Result<Self, ExportError> {
        let bounds = scene
            .content_bounds(cell_size)
            .ok_or(ExportError::EmptyScene)?
            .inflate(config.padding, config.padding);

        let longest = bounds.width().max(bounds.height());
        if longest <= 0.0 || !longest.is_finite() {
            return Err(ExportError::Render(format!("degenerate export bounds {bounds:?}")));
        }
        let mut scale = config.pixels_per_unit;
        if longest * scale < config.min_dimension {
            scale = config.min_dimension / longest;
        }
        if longest * scale > config.max_dimension {
            scale = config.max_dimension / longest;
        }

        let width = (bounds.width() * scale).round().max(1.0) as u32;
        let height = (bounds.height() * scale).round().max(1.0) as u32;
        Ok(Self {
            bounds,
            scale,
            width,
            height,
        })
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

/// A finished export, ready to be written or handed to a host
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl ExportedImage {
    /// Write the PNG into `dir` under its file name
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.png)?;
        tracing::info!("Wrote {} ({} bytes)", path.display(), self.png.len());
        Ok(path)
    }
}

/// `{stem}-{timestamp}.png` in local time
pub fn artifact_file_name(stem: &str, now: DateTime<Local>) -> String {
    format!("{}-{}.png", stem, now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Render the export display list for a scene
///
/// Selection highlights are dropped; the image shows the plan, not the
/// editing state.
pub fn export_display_list(scene: &Scene, plan: &ExportPlan, cell_size: f64) -> DisplayList {
    let mut scene = scene.clone();
    scene.deselect_all();
    let viewport = ViewPort::for_export(plan.scale, plan.bounds.origin(), cell_size);
    let draft = Draft::None;

    render_frame(&FrameInput {
        scene: &scene,
        draft: &draft,
        viewport: &viewport,
        canvas_size: plan.size(),
        hover: None,
        tool: None,
        compact: false,
        options: RenderOptions::export(),
    })
}

/// Export the session's committed scene as a PNG
pub fn export_png(session: &EditSession) -> Result<ExportedImage, ExportError> {
    let config = &session.config.export;
    let cell_size = session.viewport.cell_size;
    let plan = ExportPlan::for_scene(&session.scene, cell_size, config)?;
    let list = export_display_list(&session.scene, &plan, cell_size);
    let png = encode_png(&rasterize(&list)?)?;

    let image = ExportedImage {
        file_name: artifact_file_name(&config.artifact_name, Local::now()),
        width: plan.width,
        height: plan.height,
        png,
    };
    tracing::info!(
        "Exported {} entities at {:.1} px/unit to {} ({}x{})",
        session.scene.entity_count(),
        plan.scale,
        image.file_name,
        image.width,
        image.height
    );
    Ok(image)
}

// ============================================================================
// SVG
// ============================================================================

/// Serialise a display list as an SVG document
pub fn to_svg(list: &DisplayList) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_svg(&mut out, list)?;
    Ok(out)
}

fn write_svg(out: &mut impl fmt::Write, list: &DisplayList) -> fmt::Result {
    let width = list.size.width.round().max(1.0);
    let height = list.size.height.round().max(1.0);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;

    for item in &list.items {
        match item {
            DrawItem::Fill { path, color } => {
                writeln!(out, r#"<path d="{}" {}/>"#, path.to_svg(), paint("fill", *color))?;
            }
            DrawItem::Stroke { path, color, style } => {
                write!(
                    out,
                    r#"<path d="{}" fill="none" {} stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}""#,
                    path.to_svg(),
                    paint("stroke", *color),
                    style.width,
                    cap_name(style.start_cap),
                    join_name(style.join),
                )?;
                if !style.dash_pattern.is_empty() {
                    let dashes: Vec<String> =
                        style.dash_pattern.iter().map(f64::to_string).collect();
                    write!(
                        out,
                        r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
                        dashes.join(" "),
                        style.dash_offset
                    )?;
                }
                writeln!(out, "/>")?;
            }
            DrawItem::Text {
                text,
                position,
                size,
                color,
                anchor,
            } => {
                writeln!(
                    out,
                    r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="{}" {}>{}</text>"#,
                    position.x,
                    position.y,
                    size,
                    anchor_name(*anchor),
                    paint("fill", *color),
                    escape_xml(text)
                )?;
            }
        }
    }

    writeln!(out, "</svg>")
}

fn paint(attr: &str, color: Color) -> String {
    let c = color.to_rgba8();
    format!(
        r#"{attr}="rgb({},{},{})" {attr}-opacity="{:.3}""#,
        c.r,
        c.g,
        c.b,
        c.a as f64 / 255.0
    )
}

fn cap_name(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}

fn join_name(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(ch),
        }
    }
    s
}

// ============================================================================
// RASTER
// ============================================================================

/// Rasterise a display list at its own size
pub fn rasterize(list: &DisplayList) -> Result<image::RgbaImage, ExportError> {
    let svg = to_svg(list).map_err(|e| ExportError::Render(format!("cannot write SVG: {e}")))?;

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    if text_without_fonts(&options.fontdb, list) {
        tracing::warn!("No system fonts found; text will be missing from the export");
    }
    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|e| ExportError::Render(format!("invalid export SVG: {e}")))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        ExportError::Render(format!(
            "cannot allocate {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .ok_or_else(|| ExportError::Render("pixel buffer size mismatch".to_string()))
}

/// Labels would be dropped silently when no font is available
fn text_without_fonts(fontdb: &usvg::fontdb::Database, list: &DisplayList) -> bool {
    fontdb.is_empty() && list.texts().next().is_some()
}

pub fn encode_png(image: &image::RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}
