// File: crates/skycast-chart/src/surface.rs
// Summary: Headless host document holding named raster draw surfaces, with RGBA/PNG readback.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::error::{ChartError, ChartResult};

/// A named CPU raster canvas charts can be drawn onto.
pub struct DrawSurface {
    id: String,
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl DrawSurface {
    /// Allocate a cleared (fully transparent) surface.
    pub fn new(id: impl Into<String>, width: i32, height: i32) -> ChartResult<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::SurfaceAllocation { width, height })?;
        surface.canvas().clear(skia::Color::TRANSPARENT);
        Ok(Self { id: id.into(), surface, width, height })
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub(crate) fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Read back unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Encode("RGBA readback"));
        }
        Ok((pixels, self.width as u32, self.height as u32, stride))
    }

    /// RGBA of one pixel, `None` outside the surface.
    pub fn pixel(&mut self, x: i32, y: i32) -> ChartResult<Option<[u8; 4]>> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Ok(None);
        }
        let (px, _, _, stride) = self.to_rgba8()?;
        let i = y as usize * stride + x as usize * 4;
        Ok(Some([px[i], px[i + 1], px[i + 2], px[i + 3]]))
    }

    pub fn to_png_bytes(&mut self) -> ChartResult<Vec<u8>> {
        let (pixels, w, h, _) = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(ChartError::Encode("PNG"))?;
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .map_err(|_| ChartError::Encode("PNG"))?;
        Ok(out)
    }

    /// Write the surface as PNG, creating parent directories as needed.
    pub fn save_png(&mut self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        info!(surface = %self.id, path = %path.display(), bytes = bytes.len(), "wrote PNG");
        Ok(())
    }
}

/// Host page: the set of surfaces currently attached, looked up by id.
#[derive(Default)]
pub struct Document {
    surfaces: Vec<DrawSurface>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new canvas, replacing any surface with the same id.
    pub fn add_canvas(&mut self, id: impl Into<String>, width: i32, height: i32) -> ChartResult<&mut DrawSurface> {
        let surface = DrawSurface::new(id, width, height)?;
        debug!(id = surface.id(), width, height, "attached canvas");
        self.surfaces.retain(|s| s.id != surface.id);
        self.surfaces.push(surface);
        let last = self.surfaces.len() - 1;
        Ok(&mut self.surfaces[last])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.iter().any(|s| s.id == id)
    }

    pub fn surface_mut(&mut self, id: &str) -> Option<&mut DrawSurface> {
        self.surfaces.iter_mut().find(|s| s.id == id)
    }

    /// Detach a surface, returning it.
    pub fn remove(&mut self, id: &str) -> Option<DrawSurface> {
        let i = self.surfaces.iter().position(|s| s.id == id)?;
        Some(self.surfaces.remove(i))
    }
}
