use super::file_check::ACCEPT_ATTR;
use super::result_modal::ResultModal;
use super::view_model::CheckEmailViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::config::AppConfig;
use contracts::enums::ModelChoice;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_check_email::{CheckEmail, ModelAvailability};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CheckEmailPage(config: AppConfig) -> impl IntoView {
    let vm = CheckEmailViewModel::new(config);
    let ctx = expect_context::<AppGlobalContext>();
    let state = vm.state;

    // Labels pick up "(unavailable)" once the status check has answered
    let model_options = Signal::derive(move || {
        let status = ctx.service_status.get();
        ModelChoice::all()
            .into_iter()
            .map(|model| {
                let label = match status.availability(model) {
                    Some(ModelAvailability::Unavailable) => {
                        format!("{} (unavailable)", model.display_name())
                    }
                    _ => model.display_name().to_string(),
                };
                (model.code().to_string(), label)
            })
            .collect::<Vec<_>>()
    });

    let on_file_change = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => vm.select_file_command(file),
            None => vm.deselect_file_command(),
        }
    };

    let selected_file = move || {
        state
            .with(|s| s.selected_file.as_ref().map(|f| f.name.clone()))
            .map(|name| {
                view! {
                    <div class="upload__selected">
                        <span>
                            "Selected: " {name}
                            {move || state.with(|s| s.is_reading_file()).then_some(" (loading...)")}
                        </span>
                        <button
                            type="button"
                            class="upload__clear"
                            disabled=move || vm.is_submitting()
                            on:click=move |_| vm.clear_file_command()
                        >
                            "Clear"
                        </button>
                    </div>
                }
            })
    };

    let loading = move || {
        vm.is_submitting().then(|| {
            view! {
                <div class="detector__loading">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center justify=FlexJustify::Center>
                        <Spinner size=SpinnerSize::Small />
                        <span>"Checking email, please wait..."</span>
                    </Flex>
                </div>
            }
        })
    };

    view! {
        <div class="detector">
            <h1 class="detector__title">{CheckEmail::display_name()}</h1>

            <section class="detector__models">
                <p class="detector__lead">"Get started by selecting a model:"</p>
                <Select
                    id="modelChoice"
                    value=Signal::derive(move || state.with(|s| s.form.model.code().to_string()))
                    options=model_options
                    disabled=Signal::derive(move || vm.is_submitting())
                    on_change=Callback::new(move |code| vm.set_model(code))
                />
            </section>

            <p class="detector__lead">
                "Enter email details below to analyze for potential phishing threats."
            </p>

            <section class="upload">
                <label class="form__label" for="emailFile">
                    "Upload email file (.txt or .csv)"
                </label>
                <input
                    type="file"
                    id="emailFile"
                    class="upload__input"
                    accept=ACCEPT_ATTR
                    node_ref=vm.file_input
                    disabled=move || vm.is_submitting()
                    on:change=on_file_change
                />
                {selected_file}
            </section>

            <p class="detector__divider">"Or"</p>

            <form
                class="detector__form"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                }
            >
                <Input
                    id="sender"
                    label="Sender"
                    value=Signal::derive(move || state.with(|s| s.form.sender.clone()))
                    on_input=Callback::new(move |v| vm.set_sender(v))
                    placeholder="e.g., sender@example.com"
                />
                <Input
                    id="subject"
                    label="Subject"
                    value=Signal::derive(move || state.with(|s| s.form.subject.clone()))
                    on_input=Callback::new(move |v| vm.set_subject(v))
                    placeholder="e.g., Urgent Account Update"
                />
                <Textarea
                    id="body"
                    label="Email Body"
                    rows=10
                    required=true
                    value=Signal::derive(move || state.with(|s| s.form.body.clone()))
                    on_input=Callback::new(move |v| vm.set_body(v))
                    placeholder="Paste the full email body here..."
                />
                <Button
                    button_type="submit"
                    class="detector__submit"
                    disabled=Signal::derive(move || !vm.can_submit())
                >
                    {move || if vm.is_submitting() { "Analyzing..." } else { "Check Email" }}
                </Button>
            </form>

            {loading}

            <ResultModal
                outcome=Signal::derive(move || state.with(|s| s.outcome().cloned()))
                on_close=Callback::new(move |_| vm.close_modal_command())
            />
        </div>
    }
}
