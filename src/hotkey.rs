//! Global hotkeys via `XPLMRegisterHotKey`, which the `xplm` wrapper lacks.

use std::ffi::{c_void, CStr};
use std::os::raw::c_char;

use log::debug;
use windpressure_core::{Error, Result};
use xplm_sys::{
    xplm_DownFlag, XPLMHotKeyID, XPLMKeyFlags, XPLMRegisterHotKey, XPLMUnregisterHotKey,
    XPLM_VK_F1,
};

pub const F1: c_char = XPLM_VK_F1 as c_char;

type Callback = Box<dyn FnMut()>;

/// A registered hotkey. Unregistered on drop.
pub struct HotKey {
    id: XPLMHotKeyID,
    // Host holds a pointer into this box until we unregister.
    _callback: Box<Callback>,
}

impl HotKey {
    /// Call `callback` whenever `virtual_key` goes down.
    pub fn register<F>(virtual_key: c_char, description: &CStr, callback: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        let mut callback: Box<Callback> = Box::new(Box::new(callback));
        let refcon = &mut *callback as *mut Callback as *mut c_void;

        let id = unsafe {
            XPLMRegisterHotKey(
                virtual_key,
                xplm_DownFlag as XPLMKeyFlags,
                description.as_ptr(),
                Some(hotkey_callback),
                refcon,
            )
        };
        if id.is_null() {
            return Err(Error::HostRefused {
                what: "hotkey registration",
            });
        }

        debug!("registered hotkey {:?}", description);
        Ok(HotKey {
            id,
            _callback: callback,
        })
    }
}

impl Drop for HotKey {
    fn drop(&mut self) {
        unsafe { XPLMUnregisterHotKey(self.id) };
    }
}

unsafe extern "C" fn hotkey_callback(refcon: *mut c_void) {
    let callback = refcon as *mut Callback;
    (*callback)();
}
