pub mod analyzer;
pub mod avatar;
pub mod bands;
pub mod camera;
pub mod color;
pub mod constants;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod library;
pub mod lights;
pub mod particles;
pub mod scene;
pub mod session;

pub use analyzer::*;
pub use avatar::*;
pub use bands::*;
pub use camera::*;
pub use color::Hsl;
pub use error::*;
pub use frame::*;
pub use input::*;
pub use library::*;
pub use lights::*;
pub use particles::*;
pub use session::*;
