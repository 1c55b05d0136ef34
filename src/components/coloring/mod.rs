mod component;
mod config;
mod error;
mod instance;
mod layout;
mod palette;
mod render;
mod scene;
mod stage;
mod state;
#[cfg(test)]
mod testing;
mod toggle;
mod types;

pub use component::ColoringCanvas;
pub use config::VisConfig;
pub use instance::Instance;
pub use state::Visualization;
