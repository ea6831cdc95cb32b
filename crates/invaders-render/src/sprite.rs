//! Sprite images: CPU-side decoding and GPU upload

use invaders_core::{InvadersError, Result, Size};
use invaders_runtime::SpriteSource;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use wgpu::util::DeviceExt;

/// A decoded RGBA8 image, not yet on the GPU.
///
/// Decoding happens before any window exists so a bad asset never leaves a
/// half-initialized window on screen.
pub struct SpriteImage {
    pub path: PathBuf,
    pub rgba: image::RgbaImage,
}

impl SpriteImage {
    /// Decode an image file. Any I/O or decode failure is an `AssetLoad` error
    /// carrying the path and the decoder's message.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| InvadersError::asset_load(path, e))?;
        let rgba = img.to_rgba8();

        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(InvadersError::asset_load(path, "image has zero size"));
        }

        Ok(Self {
            path: path.to_path_buf(),
            rgba,
        })
    }

    /// Pixel dimensions
    pub fn size(&self) -> Size {
        let (width, height) = self.rgba.dimensions();
        Size::new(width as i32, height as i32)
    }
}

fn next_texture_id() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

/// A GPU-resident sprite texture with its view and sampler
pub struct SpriteTexture {
    id: u64,
    _texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    size: Size,
}

impl SpriteTexture {
    /// Upload a decoded image to the GPU
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        image: &SpriteImage,
    ) -> Self {
        let (width, height) = image.rgba.dimensions();

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            image.rgba.as_raw(),
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Nearest filtering keeps pixel art crisp when the blit scales it
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{} Sampler", label)),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            ..Default::default()
        });

        log::debug!("Uploaded sprite '{}' ({}x{})", label, width, height);

        Self {
            id: next_texture_id(),
            _texture: texture,
            view,
            sampler,
            size: image.size(),
        }
    }
}

impl SpriteTexture {
    /// Process-unique identity, used to match cached draw state
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl SpriteSource for SpriteTexture {
    fn size(&self) -> Size {
        self.size
    }
}
