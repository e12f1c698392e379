pub mod footer;
pub mod global_context;

use footer::Footer;
use leptos::prelude::*;

/// Page frame: content on top, status bar at the bottom.
///
/// ```text
/// +------------------------------------------+
/// |               content                    |
/// +------------------------------------------+
/// |  service status        model on the hub  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-main">
                {children()}
            </div>
            <Footer />
        </div>
    }
}
