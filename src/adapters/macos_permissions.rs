#[cfg(target_os = "macos")]
pub mod macos {
    use std::ffi::CStr;

    use crate::global_constants::LOG_TAG_PERMISSIONS;

    const CORE_GRAPHICS_PATH: &CStr = c"/System/Library/Frameworks/CoreGraphics.framework/CoreGraphics";

    type ScreenCaptureAccessFn = unsafe extern "C" fn() -> bool;

    /// Checks screen recording access and prompts the user once if it is missing.
    pub fn request_screen_capture_permission() -> bool {
        log::info!("{} Checking screen recording permission", LOG_TAG_PERMISSIONS);

        if call_core_graphics(c"CGPreflightScreenCaptureAccess").unwrap_or(false) {
            log::info!("{} Screen recording permission granted", LOG_TAG_PERMISSIONS);
            return true;
        }

        log::warn!(
            "{} Screen recording permission missing, requesting access",
            LOG_TAG_PERMISSIONS
        );

        let granted = call_core_graphics(c"CGRequestScreenCaptureAccess").unwrap_or(false);
        if !granted {
            log::warn!("{} Screen recording permission denied", LOG_TAG_PERMISSIONS);
        }
        granted
    }

    fn call_core_graphics(symbol: &CStr) -> Option<bool> {
        unsafe {
            let lib = libc::dlopen(CORE_GRAPHICS_PATH.as_ptr(), libc::RTLD_LAZY);

            if lib.is_null() {
                log::warn!(
                    "{} Could not load CoreGraphics framework",
                    LOG_TAG_PERMISSIONS
                );
                return None;
            }

            let func_ptr = libc::dlsym(lib, symbol.as_ptr());

            if func_ptr.is_null() {
                libc::dlclose(lib);
                log::warn!("{} Could not find {:?}", LOG_TAG_PERMISSIONS, symbol);
                return None;
            }

            let access_fn: ScreenCaptureAccessFn = std::mem::transmute(func_ptr);
            let result = access_fn();

            libc::dlclose(lib);

            Some(result)
        }
    }
}

#[cfg(not(target_os = "macos"))]
pub mod macos {
    pub fn request_screen_capture_permission() -> bool {
        true
    }
}
