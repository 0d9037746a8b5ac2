//! Test fixtures
//!
//! Blank page images written to disk, and scripted stand-ins for the
//! detection and rendering collaborators of a segmentation session.

use crate::error::{TestError, TestResult};
use pagezones_core::PageSize;
use pagezones_seg::{
    DetectError, DetectedPage, DetectedRegion, Detector, PageImage, RenderError, Renderer,
};
use pagezones_template::SegmentationParameters;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tempfile::TempDir;

/// Create a scratch directory for page images, removed on drop
pub fn scratch_dir() -> TestResult<TempDir> {
    Ok(tempfile::tempdir()?)
}

fn write_page(dir: &Path, name: &str, data: &[u8]) -> TestResult<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, data).map_err(|e| TestError::PageWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(path)
}

/// Write a blank 8-bit binary PGM page
pub fn write_pnm_page(dir: &Path, name: &str, width: u32, height: u32) -> TestResult<PathBuf> {
    if width == 0 || height == 0 {
        return Err(TestError::InvalidPageSize { width, height });
    }
    let mut data = format!("P5\n# pagezones fixture\n{} {}\n255\n", width, height).into_bytes();
    data.resize(data.len() + width as usize * height as usize, 0xff);
    write_page(dir, name, &data)
}

/// Write a blank 1-bit BMP page
pub fn write_bmp_page(dir: &Path, name: &str, width: u32, height: u32) -> TestResult<PathBuf> {
    let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
        return Err(TestError::InvalidPageSize { width, height });
    };
    if w == 0 || h == 0 {
        return Err(TestError::InvalidPageSize { width, height });
    }

    const HEADER_SIZE: u32 = 14 + 40 + 8;
    let row_bytes = width.div_ceil(32) * 4;
    let image_size = row_bytes * height;

    let mut data = Vec::with_capacity((HEADER_SIZE + image_size) as usize);
    // file header
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&(HEADER_SIZE + image_size).to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&HEADER_SIZE.to_le_bytes());
    // info header
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&w.to_le_bytes());
    data.extend_from_slice(&h.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&image_size.to_le_bytes());
    data.extend_from_slice(&2835i32.to_le_bytes());
    data.extend_from_slice(&2835i32.to_le_bytes());
    data.extend_from_slice(&2u32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    // palette: black, white
    data.extend_from_slice(&[0, 0, 0, 0, 255, 255, 255, 0]);
    data.resize((HEADER_SIZE + image_size) as usize, 0xff);

    write_page(dir, name, &data)
}

/// One call observed by a [`ScriptedDetector`]
#[derive(Debug, Clone, PartialEq)]
pub struct DetectCall {
    /// File name of the page image
    pub image: String,
    /// Page size reported for the image
    pub size: PageSize,
    /// Whether every template position was bound to `size`
    pub templates_bound: bool,
}

/// Detector returning preset regions per page image file name
///
/// Unknown images yield no regions.
#[derive(Debug, Default)]
pub struct ScriptedDetector {
    scripts: HashMap<String, Vec<DetectedRegion>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<DetectCall>>,
}

impl ScriptedDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `regions` for the image named `image`
    pub fn with_regions(mut self, image: &str, regions: Vec<DetectedRegion>) -> Self {
        self.scripts.insert(image.to_string(), regions);
        self
    }

    /// Fail detection for the image named `image`
    pub fn with_failure(mut self, image: &str) -> Self {
        self.failing.insert(image.to_string());
        self
    }

    /// Calls observed so far, oldest first
    pub fn calls(&self) -> Vec<DetectCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Detector for ScriptedDetector {
    fn detect(
        &self,
        params: &SegmentationParameters,
        image: &PageImage,
    ) -> Result<Vec<DetectedRegion>, DetectError> {
        let name = image
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let templates_bound = params
            .templates
            .iter()
            .flat_map(|t| t.positions())
            .all(|p| p.bound_size() == Some(image.size()));
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DetectCall {
                image: name.clone(),
                size: image.size(),
                templates_bound,
            });

        if self.failing.contains(&name) {
            return Err(DetectError::new(format!("scripted failure for {}", name)));
        }
        Ok(self.scripts.get(&name).cloned().unwrap_or_default())
    }
}

/// Renderer writing a plain-text layout listing
///
/// Each page renders as a header line `page <id> <image stem> <w>x<h>`
/// followed by one line per region: export identifier, id and outline
/// points. A failing renderer returns an error for every page.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    fail: bool,
    rendered: Mutex<Vec<u32>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer failing on every page
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Page ids rendered successfully, oldest first
    pub fn rendered(&self) -> Vec<u32> {
        self.rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, page: &DetectedPage) -> Result<Vec<u8>, RenderError> {
        if self.fail {
            return Err(RenderError::new(format!(
                "scripted render failure for page {}",
                page.page_id()
            )));
        }

        let image = page.image();
        let mut out = format!(
            "page {} {} {}x{}\n",
            page.page_id(),
            image.stem(),
            image.size().width,
            image.size().height
        );
        for region in page.result().regions() {
            let points: Vec<String> = region
                .polygon()
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect();
            out.push_str(&format!(
                "{} {} {}\n",
                page.parameters()
                    .templates
                    .export_identifier(region.region_type()),
                region.id(),
                points.join(" ")
            ));
        }

        self.rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(page.page_id());
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagezones_io::{ImageFormat, read_image_header};

    #[test]
    fn test_written_pages_probe() {
        let dir = scratch_dir().unwrap();
        let pnm = write_pnm_page(dir.path(), "a.pgm", 33, 7).unwrap();
        let bmp = write_bmp_page(dir.path(), "b.bmp", 33, 7).unwrap();

        let header = read_image_header(&pnm).unwrap();
        assert_eq!((header.width, header.height, header.format), (33, 7, ImageFormat::Pnm));
        let header = read_image_header(&bmp).unwrap();
        assert_eq!((header.width, header.height, header.format), (33, 7, ImageFormat::Bmp));
        // 33 pixels need two 32-bit words per row
        assert_eq!(fs::metadata(&bmp).unwrap().len(), 62 + 8 * 7);

        assert!(write_pnm_page(dir.path(), "z.pgm", 0, 7).is_err());
        assert!(write_bmp_page(dir.path(), "z.bmp", u32::MAX, 7).is_err());
    }
}
