use super::file_check::FileMeta;
use super::model;
use super::state::{DetectorState, FileDecision};
use crate::shared::config::AppConfig;
use chrono::Utc;
use contracts::enums::ModelChoice;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the email check page
///
/// All transitions go through [`DetectorState`]; the commands here only add
/// the async work (HTTP call, file read) and logging around them.
#[derive(Clone, Copy)]
pub struct CheckEmailViewModel {
    pub state: RwSignal<DetectorState>,
    /// The `<input type="file">`, reset after rejections and clears
    pub file_input: NodeRef<html::Input>,
    config: StoredValue<AppConfig>,
}

impl CheckEmailViewModel {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: RwSignal::new(DetectorState::default()),
            file_input: NodeRef::new(),
            config: StoredValue::new(config),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state.with(|s| s.can_submit())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn set_sender(&self, value: String) {
        self.state.update(|s| s.form.sender = value);
    }

    pub fn set_subject(&self, value: String) {
        self.state.update(|s| s.form.subject = value);
    }

    pub fn set_body(&self, value: String) {
        self.state.update(|s| s.form.body = value);
    }

    pub fn set_model(&self, code: String) {
        match ModelChoice::from_code(&code) {
            Some(model) => self.state.update(|s| s.form.model = model),
            None => log::warn!("ignoring unknown model choice '{}'", code),
        }
    }

    /// Sends the form to the prediction endpoint. A no-op while a request
    /// is in flight or the body is empty.
    pub fn submit_command(&self) {
        let Some(submission) = self.state.try_update(|s| s.begin_submission()).flatten() else {
            log::debug!("submission not admitted");
            return;
        };

        let ticket = submission.ticket;
        let config = self.config.get_value();
        let state = self.state;
        log::info!(
            "submission {} started (model {})",
            ticket,
            submission.request.model_choice
        );

        spawn_local(async move {
            let result = model::predict(&config, &submission.request).await;
            match &result {
                Ok(r) => log::info!(
                    "submission {} finished: {} ({:.4})",
                    ticket,
                    r.prediction,
                    r.confidence
                ),
                Err(e) => log::error!("submission {} failed: {:?}", ticket, e),
            }

            state.update(|s| {
                if !s.complete_submission(ticket, result, Utc::now()) {
                    log::warn!("dropping result of stale submission {}", ticket);
                }
            });
        });
    }

    /// Validates the picked file and loads it into the body
    pub fn select_file_command(&self, file: web_sys::File) {
        let meta = FileMeta::from_file(&file);
        let decision = self
            .state
            .try_update(|s| s.select_file(meta.clone()))
            .unwrap_or(FileDecision::Ignored);

        match decision {
            FileDecision::Accepted(selected) => {
                log::info!(
                    "reading {} ({} bytes, type '{}')",
                    selected.name,
                    selected.size_bytes,
                    meta.mime_type
                );
                let state = self.state;
                spawn_local(async move {
                    match model::read_file_text(file).await {
                        Ok(text) => state.update(|s| {
                            if !s.apply_file_text(selected.id, text) {
                                log::debug!("{} was replaced before it finished loading", selected.name);
                            }
                        }),
                        Err(e) => {
                            log::error!("could not read {}: {:?}", selected.name, e);
                            state.update(|s| {
                                s.fail_file_read(selected.id, e);
                            });
                        }
                    }
                });
            }
            FileDecision::Rejected(message) => {
                log::warn!("rejected {}: {}", meta.name, message);
                self.reset_file_input();
            }
            FileDecision::Ignored => {
                log::debug!("file selection ignored while a submission is running");
                self.reset_file_input();
            }
        }
    }

    /// The picker was dismissed without a file
    pub fn deselect_file_command(&self) {
        self.state.update(|s| s.selected_file = None);
    }

    /// Drops the file and blanks sender, subject and body
    pub fn clear_file_command(&self) {
        self.state.update(|s| s.clear_file());
        self.reset_file_input();
    }

    pub fn close_modal_command(&self) {
        self.state.update(|s| s.close_modal());
    }

    /// Empties the file input so picking the same file fires `change` again
    fn reset_file_input(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }
}
