use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Escape, a click on the overlay and the header close
/// button all call `on_close`.
#[component]
pub fn Modal(
    /// Heading; omitted for dialogs that draw their own
    #[prop(optional, into)]
    title: Option<String>,
    on_close: Callback<()>,
    /// Extra class on the dialog box, e.g. "modal--error"
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let dialog_class = format!("modal {}", class.unwrap_or_default());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class=dialog_class
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {title.map(|title| view! {
                    <div class="modal-header">
                        <h2 class="modal-title">{title}</h2>
                        <button
                            class="modal__close"
                            aria-label="Close modal"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </div>
                })}
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
