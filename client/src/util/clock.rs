//! Wall-clock labels stamped on outgoing messages.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format a 24-hour `HH:MM` label.
pub fn clock_label(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Current local time as `HH:MM`; `None` outside the browser.
pub fn now_label() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        Some(clock_label(now.get_hours(), now.get_minutes()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
