//! Greeting revealed one character at a time.
//!
//! DESIGN
//! ======
//! A single local task walks the `TypingScript` and publishes each cursor to a
//! signal. The task checks a liveness flag after every sleep and exits once the
//! component is cleaned up.

use std::time::Duration;

use leptos::prelude::*;

use crate::util::typing::{CHAR_DELAY, LINE_DELAY, TypingCursor, TypingScript};

#[component]
pub fn TypingEffect(
    user_name: &'static str,
    #[prop(default = CHAR_DELAY)] char_delay: Duration,
    #[prop(default = LINE_DELAY)] line_delay: Duration,
) -> impl IntoView {
    let script = TypingScript::greeting(user_name).with_delays(char_delay, line_delay);
    let cursor = RwSignal::new(TypingCursor::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let script = script.clone();
        leptos::task::spawn_local(async move {
            let mut current = TypingCursor::default();
            while let Some((delay, next)) = script.next_step(current) {
                gloo_timers::future::sleep(delay).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                current = next;
                cursor.set(current);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let lines = move || {
        script
            .visible(cursor.get())
            .into_iter()
            .map(|line| {
                view! {
                    {line.text}
                    {line.broken.then(|| view! { <br/> })}
                }
            })
            .collect_view()
    };

    view! { <div id="typing-text">{lines}</div> }
}
