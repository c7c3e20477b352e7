use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use domain::DebounceGate;

use crate::config::use_admin_config;

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Wraps `on_settled` so it only fires once input has been quiet for
/// `search.debounce_ms`. Earlier calls within the window are dropped.
pub fn use_debounced(on_settled: EventHandler<String>) -> Callback<String> {
    let config = use_admin_config();
    let gate = use_hook(|| Rc::new(DebounceGate::new()));

    use_callback(move |value: String| {
        let ticket = gate.bump();
        let gate = gate.clone();
        let delay = Duration::from_millis(config.peek().search.debounce_ms);
        spawn(async move {
            sleep(delay).await;
            if gate.is_current(ticket) {
                on_settled.call(value);
            }
        });
    })
}
