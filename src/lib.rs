#[macro_use(xplane_plugin)]
extern crate xplm;
extern crate xplm_sys;

use xplm::flight_loop::FlightLoop;
use xplm::plugin::{Plugin, PluginInfo};
use xplm::window::WindowRef;

use std::cell::RefCell;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::PathBuf;
use std::rc::Rc;

use log::{error, info, LevelFilter};
use windpressure_core::{Config, Error, Overlay};

mod flight_loop;
mod hotkey;
mod logging;
mod panel_window;
mod weather_refs;

use hotkey::HotKey;
use weather_refs::WeatherRefs;

struct WindPressure {
    // Each of these holds a handle to the shared overlay. The host calls all
    // of them on the sim's main thread.
    window: Option<WindowRef>,
    flight_loop: Option<FlightLoop>,
    hotkey: Option<HotKey>,
}

impl WindPressure {
    fn try_start() -> Result<Self, Error> {
        let config_path = Config::config_path(&xplane_root());
        info!("reading configuration from {}", config_path.display());
        let config = Config::load_from(&config_path)?;
        logging::set_level(config.log_level()?);

        let weather = WeatherRefs::find()?;
        let overlay = Rc::new(RefCell::new(Overlay::new(config.display.seconds)));

        let window = panel_window::create(config.panel_rect(), overlay.clone(), weather);
        let flight_loop = flight_loop::start(overlay.clone());

        let hotkey = HotKey::register(hotkey::F1, c"Check weather", move || {
            if let Ok(mut overlay) = overlay.try_borrow_mut() {
                overlay.on_hotkey();
            }
        })?;

        info!("plugin loaded, panel shows for {}s on F1", config.display.seconds);
        Ok(WindPressure {
            window: Some(window),
            flight_loop: Some(flight_loop),
            hotkey: Some(hotkey),
        })
    }
}

impl Plugin for WindPressure {
    type StartErr = Error;
    fn start() -> Result<Self, Self::StartErr> {
        logging::init(LevelFilter::Info);
        Self::try_start().map_err(|e| {
            error!("failed to start: {}", e);
            e
        })
    }

    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "WindPressure".into(),
            signature: "aimappy.xplane.WindPressure".into(),
            description: "A plugin that shows the current wind speed/direction and baro pressure."
                .into(),
        }
    }

    fn enable(&mut self) {

    }

    fn disable(&mut self) {

    }

    fn stop(&mut self) {
        // Hotkey first so nothing shows the panel again mid-teardown.
        self.hotkey.take();
        if let Some(mut flight_loop) = self.flight_loop.take() {
            flight_loop.deactivate();
        }
        self.window.take();
        info!("plugin stopped");
    }
}

/// X-Plane's installation folder, as a native path.
fn xplane_root() -> PathBuf {
    let mut buf = [0 as c_char; 1024];
    unsafe {
        xplm_sys::XPLMEnableFeature(c"XPLM_USE_NATIVE_PATHS".as_ptr(), 1);
        xplm_sys::XPLMGetSystemPath(buf.as_mut_ptr());
    }
    let root = unsafe { CStr::from_ptr(buf.as_ptr()) };
    PathBuf::from(root.to_string_lossy().into_owned())
}

xplane_plugin!(WindPressure);
