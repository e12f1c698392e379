use super::presentation::{
    label_css_class, modal_content, ExplanationView, FactorRow, ModalContent,
    EXPLANATION_FALLBACK_TEXT,
};
use super::state::Outcome;
use crate::shared::components::ui::Button;
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Result / failure dialog, rendered only while an outcome exists
#[component]
pub fn ResultModal(
    #[prop(into)]
    outcome: Signal<Option<Outcome>>,
    on_close: Callback<()>,
) -> impl IntoView {
    move || {
        outcome.get().map(|outcome| match modal_content(&outcome) {
            ModalContent::Result {
                prediction,
                label,
                confidence,
                model_name,
                analyzed_at,
                explanation,
            } => view! {
                <Modal title="Analysis Result" on_close=on_close>
                    <div class="result__block">
                        <p class="result__caption">"Prediction"</p>
                        <p class=label_css_class(label)>{prediction.clone()}</p>
                    </div>
                    <div class="result__block">
                        <p class="result__caption">"Confidence"</p>
                        <p class="result__confidence">{confidence}</p>
                    </div>
                    <p class="result__meta">{format!("{} · {}", model_name, analyzed_at)}</p>
                    {explanation_section(&prediction, explanation)}
                </Modal>
            }
            .into_any(),
            ModalContent::Failure(message) => view! {
                <Modal on_close=on_close class="modal--error">
                    <div class="result__failure">
                        <h2 class="result__failure-title">"Analysis Failed"</h2>
                        <p class="result__failure-text">{message}</p>
                        <Button variant="danger" on_click=Callback::new(move |_| on_close.run(()))>
                            "Close"
                        </Button>
                    </div>
                </Modal>
            }
            .into_any(),
        })
    }
}

fn explanation_section(prediction: &str, explanation: ExplanationView) -> AnyView {
    match explanation {
        ExplanationView::Factors(rows) => {
            let intro = format!(
                "Top words influencing the \"{}\" classification (positive weights support this prediction):",
                prediction
            );
            view! {
                <div class="result__factors">
                    <h3 class="result__factors-title">"Key Factors"</h3>
                    <p class="result__factors-intro">{intro}</p>
                    <ul class="factor-list">
                        {rows.into_iter().map(factor_item).collect_view()}
                    </ul>
                </div>
            }
            .into_any()
        }
        ExplanationView::Unavailable => view! {
            <p class="result__factors-fallback">{EXPLANATION_FALLBACK_TEXT}</p>
        }
        .into_any(),
        ExplanationView::Hidden => view! { <></> }.into_any(),
    }
}

fn factor_item(row: FactorRow) -> impl IntoView {
    view! {
        <li class=row.tone.css_class()>
            <span class="factor__word">{format!("\"{}\"", row.word)}</span>
            {format!(": {}", row.weight)}
        </li>
    }
}
