use portfolio_trail::DeviceProfile;
use web_sys::Window;

/// Sample touch support and viewport width from the browser
pub fn probe(window: &Window) -> DeviceProfile {
    let navigator = window.navigator();

    // Reflect instead of typed bindings: `ontouchstart` and the ms-prefixed
    // property are absent on most desktop browsers
    let has_touch_events = js_sys::Reflect::has(window, &"ontouchstart".into()).unwrap_or(false);
    let ms_max_touch_points = js_sys::Reflect::get(&navigator, &"msMaxTouchPoints".into())
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    DeviceProfile {
        has_touch_events,
        max_touch_points: navigator.max_touch_points().max(0) as u32,
        ms_max_touch_points: ms_max_touch_points.max(0.0) as u32,
        viewport_width: window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}
