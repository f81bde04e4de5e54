use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use windpressure_core::Overlay;
use xplm::flight_loop::{FlightLoop, LoopState};

/// The display countdown runs in whole seconds.
pub const TICK: Duration = Duration::from_secs(1);

/// Schedule the once-a-second countdown for `overlay`.
pub fn start(overlay: Rc<RefCell<Overlay>>) -> FlightLoop {
    let mut flight_loop = FlightLoop::new(move |loop_state: &mut LoopState| {
        tick(&overlay, loop_state)
    });
    flight_loop.schedule_after(TICK);
    flight_loop
}

fn tick(overlay: &RefCell<Overlay>, loop_state: &mut LoopState) {
    // X-Plane does not call us concurrently, so this only fails if a
    // callback re-entered us.
    if let Ok(mut overlay) = overlay.try_borrow_mut() {
        overlay.on_tick();
    }
    loop_state.call_after(TICK);
}
