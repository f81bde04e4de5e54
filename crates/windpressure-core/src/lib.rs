//! Host-independent pieces of the WindPressure overlay.
//!
//! Everything in here can run without X-Plane: the countdown that decides
//! whether the panel is shown, the text it shows, and the panel layout
//! expressed against a [`panel::Canvas`].

pub mod config;
pub mod error;
pub mod logging;
pub mod overlay;
pub mod panel;
pub mod timer;
pub mod weather;

pub use config::Config;
pub use error::{Error, Result};
pub use overlay::Overlay;
pub use panel::{Canvas, PanelRect};
pub use timer::DisplayTimer;
pub use weather::{WeatherSample, WeatherSource};
