mod asset_loader_error;
mod grid_config_error;
mod missing_clip_error;

pub use asset_loader_error::*;
pub use grid_config_error::*;
pub use missing_clip_error::*;
