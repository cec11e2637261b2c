pub mod config;
pub mod direction;
pub mod engine;
pub mod particles;
pub mod render_loop;
pub mod shape;
pub mod state;
pub mod timeline;
