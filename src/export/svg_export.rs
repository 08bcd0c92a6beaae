//! SVG crease-pattern export.
//!
//! Placeholder: only the document frame is emitted, no crease geometry.
//! The reference exporter behaves the same way; a real flat-pattern
//! exporter would unroll each cell's quad into the plane here.

use std::path::Path;

use anyhow::Result;

/// Write an empty crease-pattern frame of the given pixel size.
pub fn export_crease_pattern_frame<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let svg = format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" ",
            "viewBox=\"0 0 {w} {h}\">\n",
            "  <rect x=\"0.5\" y=\"0.5\" width=\"{rw}\" height=\"{rh}\" ",
            "fill=\"none\" stroke=\"black\"/>\n",
            "</svg>\n"
        ),
        w = width,
        h = height,
        rw = width.saturating_sub(1),
        rh = height.saturating_sub(1),
    );

    std::fs::write(path.as_ref(), svg)?;
    log::info!("Crease-pattern frame exported: {}", path.as_ref().display());
    Ok(())
}
