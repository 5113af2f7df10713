//! Draws the planet and cloud layers into the window surface.

use planetoid_sprite::RenderState;

use crate::gpu::{RenderContext, SurfaceError};
use crate::sprite::{SpriteLayer, SpritePipeline};

/// Window clear colour: opaque black.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

/// GPU side of the two-sprite display.
pub struct SpriteCompositor {
    pipeline: SpritePipeline,
    planet: SpriteLayer,
    clouds: SpriteLayer,
}

impl SpriteCompositor {
    /// Create layers sized for `state`'s images.
    pub fn new(ctx: &RenderContext, state: &RenderState) -> Self {
        let pipeline = SpritePipeline::new(&ctx.device, ctx.surface_format);
        let window = ctx.size();
        let planet = SpriteLayer::new(
            &ctx.device,
            &pipeline,
            "planet-sprite",
            state.planet.width,
            window,
        );
        let clouds = SpriteLayer::new(
            &ctx.device,
            &pipeline,
            "cloud-sprite",
            state.clouds.width,
            window,
        );
        planet.upload(&ctx.queue, &state.planet);
        clouds.upload(&ctx.queue, &state.clouds);

        log::info!(
            "Sprite compositor ready: planet {}px, clouds {}px",
            planet.size,
            clouds.size
        );

        Self {
            pipeline,
            planet,
            clouds,
        }
    }

    /// Replace both textures with the images in `state`.
    pub fn upload(&self, ctx: &RenderContext, state: &RenderState) {
        self.planet.upload(&ctx.queue, &state.planet);
        self.clouds.upload(&ctx.queue, &state.clouds);
    }

    /// Recentre both quads for the current surface size.
    pub fn resize(&self, ctx: &RenderContext) {
        let window = ctx.size();
        self.planet.resize(&ctx.queue, window);
        self.clouds.resize(&ctx.queue, window);
    }

    /// Clear, draw planet then clouds, and present.
    pub fn draw(&self, ctx: &RenderContext) -> Result<(), SurfaceError> {
        let surface_texture = ctx.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sprite-frame-encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sprite-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline.pipeline);
            self.planet.draw(&mut render_pass);
            self.clouds.draw(&mut render_pass);
        }

        ctx.queue.submit([encoder.finish()]);
        surface_texture.present();
        Ok(())
    }
}
