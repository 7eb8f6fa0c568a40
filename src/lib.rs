//! Software renderer for an Invaders-style arcade game.
//!
//! Sprites are cell bitmaps loaded from a text sheet, text is rasterized from
//! per-locale faces, and every screen of the game is a method on
//! [`draw::DrawManager`] that paints an off-screen [`renderer::FrameBuffer`]
//! handed to a [`renderer::Presenter`] once per frame.

pub mod assets;
pub mod config;
pub mod draw;
pub mod renderer;
pub mod sprite;
pub mod state;
pub mod text;
