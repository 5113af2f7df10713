//! wgpu presentation of planet sprites: surface management and an
//! alpha-blended sprite pipeline.

pub mod compositor;
pub mod gpu;
pub mod sprite;

pub use compositor::{CLEAR_COLOR, SpriteCompositor};
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use sprite::{
    SPRITE_BLEND, SPRITE_SHADER_SOURCE, SpriteLayer, SpritePipeline, SpriteVertex, sprite_quad,
};
