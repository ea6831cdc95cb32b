//! Frame assembly: queues sprite blits and presents them in one pass

use crate::context::RenderContext;
use crate::sprite::{SpriteImage, SpriteTexture};
use crate::sprite_pipeline::{SpriteDraw, SpritePipeline, SpriteUniforms};
use invaders_core::{Color, Rect, Size};
use invaders_runtime::{Canvas, SpriteSource};

/// Renders sprites to the window surface.
///
/// Coordinates are logical pixels; the shader maps `logical_size` onto the
/// whole surface, so a HiDPI surface just gets a scaled image.
pub struct SpriteRenderer {
    context: RenderContext,
    pipeline: SpritePipeline,
    logical_size: Size,
    clear_color: Color,
    draws: DrawSlots<SpriteDraw>,
}

impl SpriteRenderer {
    pub fn new(context: RenderContext, logical_size: Size) -> Self {
        let pipeline = SpritePipeline::new(&context.device, context.format());

        Self {
            context,
            pipeline,
            logical_size,
            clear_color: Color::BLACK,
            draws: DrawSlots::new(),
        }
    }

    /// Upload a decoded image so it can be drawn
    pub fn upload(&self, label: &str, image: &SpriteImage) -> SpriteTexture {
        SpriteTexture::upload(&self.context.device, &self.context.queue, label, image)
    }

    /// Resize the surface (scale-factor changes; the window itself is fixed-size)
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.context.resize(new_size);
    }

    fn acquire_frame(&mut self) -> Option<wgpu::SurfaceTexture> {
        match self.context.surface.get_current_texture() {
            Ok(output) => Some(output),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring and skipping frame");
                self.context.reconfigure();
                None
            }
            Err(e) => {
                log::warn!("Surface error, skipping frame: {:?}", e);
                None
            }
        }
    }
}

impl Canvas for SpriteRenderer {
    type Texture = SpriteTexture;

    fn clear(&mut self) {
        self.draws.begin_frame();
    }

    fn draw(&mut self, texture: &SpriteTexture, src: Rect, dst: Rect) {
        let uniforms = SpriteUniforms::new(self.logical_size, texture.size(), src, dst);
        let Self {
            context,
            pipeline,
            draws,
            ..
        } = self;

        draws.next(
            texture.id(),
            || pipeline.create_draw(&context.device, texture, &uniforms),
            |draw| draw.update(&context.queue, &uniforms),
        );
    }

    fn present(&mut self) {
        let Some(output) = self.acquire_frame() else {
            return;
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Sprite Encoder"),
            });

        {
            let [r, g, b, a] = self.clear_color.to_array();
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sprite Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline.pipeline);
            for draw in self.draws.frame() {
                render_pass.set_bind_group(0, &draw.bind_group, &[]);
                render_pass.draw(0..6, 0..1);
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

/// Draw state kept across frames.
///
/// Slot `i` serves the `i`th blit of every frame. It is rebuilt only when a
/// different texture lands on it; otherwise its uniforms are rewritten.
struct DrawSlots<S> {
    slots: Vec<(u64, S)>,
    used: usize,
}

impl<S> DrawSlots<S> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            used: 0,
        }
    }

    fn begin_frame(&mut self) {
        self.used = 0;
    }

    /// Claim the next slot for `texture_id`. Returns `true` when an existing
    /// slot was reused.
    fn next(
        &mut self,
        texture_id: u64,
        create: impl FnOnce() -> S,
        reuse: impl FnOnce(&S),
    ) -> bool {
        let index = self.used;
        self.used += 1;

        if let Some((id, slot)) = self.slots.get(index) {
            if *id == texture_id {
                reuse(slot);
                return true;
            }
        }

        let slot = (texture_id, create());
        if index < self.slots.len() {
            self.slots[index] = slot;
        } else {
            self.slots.push(slot);
        }
        false
    }

    /// Slots claimed since the last `begin_frame`, in draw order
    fn frame(&self) -> impl Iterator<Item = &S> {
        self.slots[..self.used].iter().map(|(_, slot)| slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_slots_reused_across_frames() {
        let mut slots = DrawSlots::new();
        let created = Cell::new(0);
        let create = |name: &'static str| {
            created.set(created.get() + 1);
            name
        };

        for _ in 0..3 {
            slots.begin_frame();
            slots.next(1, || create("ship"), |_| {});
            slots.next(2, || create("enemy"), |_| {});
            assert_eq!(slots.frame().copied().collect::<Vec<_>>(), vec!["ship", "enemy"]);
        }
        assert_eq!(created.get(), 2);
    }

    #[test]
    fn test_slot_rebuilt_when_texture_changes() {
        let mut slots = DrawSlots::new();
        slots.begin_frame();
        assert!(!slots.next(1, || "ship", |_| {}));
        assert!(!slots.next(2, || "enemy", |_| {}));

        slots.begin_frame();
        assert!(!slots.next(2, || "enemy", |_| {}));
        assert!(!slots.next(1, || "ship", |_| {}));
        assert_eq!(slots.frame().copied().collect::<Vec<_>>(), vec!["enemy", "ship"]);

        slots.begin_frame();
        assert!(slots.next(2, || "unused", |s| assert_eq!(*s, "enemy")));
        assert_eq!(slots.frame().count(), 1);
    }
}
