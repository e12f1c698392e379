//! Submission and file-ingestion state machine
//!
//! ```text
//! Idle --begin_submission--> Submitting --complete_submission--> Finished(Success | Failure)
//!   ^                                                                  |
//!   +---------------------------- close_modal -------------------------+
//! ```
//!
//! File rejections and read failures jump straight to `Finished(Failure)`.
//! The modal is open exactly while the phase is `Finished`, so a result and
//! an error can never be shown together.

use super::error::ApiError;
use super::file_check::{self, FileMeta};
use chrono::{DateTime, Utc};
use contracts::enums::ModelChoice;
use contracts::usecases::u101_check_email::{PredictionRequest, PredictionResult};
use uuid::Uuid;

/// Editable fields of the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailForm {
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub model: ModelChoice,
}

impl EmailForm {
    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            subject: self.subject.clone(),
            sender: self.sender.clone(),
            body: self.body.clone(),
            model_choice: self.model,
        }
    }
}

/// File whose contents are (being) loaded into the body
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// Identifies the outstanding read
    pub id: Uuid,
    pub name: String,
    pub size_bytes: u64,
}

/// A successful classification together with how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub result: PredictionResult,
    pub model: ModelChoice,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Analysis),
    /// Text for the failure panel
    Failure(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting {
        ticket: Uuid,
        model: ModelChoice,
    },
    Finished(Outcome),
}

/// Request to dispatch for an admitted submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: Uuid,
    pub request: PredictionRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileDecision {
    /// Caller should read the file and hand the text to `apply_file_text`
    Accepted(SelectedFile),
    /// Caller should reset the file input; the error is already in the modal
    Rejected(String),
    /// A submission is in flight
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectorState {
    pub form: EmailForm,
    pub selected_file: Option<SelectedFile>,
    /// Id of the file read still in progress
    pub reading: Option<Uuid>,
    pub phase: Phase,
}

impl DetectorState {
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_reading_file(&self) -> bool {
        self.reading.is_some()
    }

    /// Submit is allowed with a non-empty body, nothing in flight and no
    /// file still loading into the body
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, Phase::Idle) && self.reading.is_none() && !self.form.body.is_empty()
    }

    /// Admits one submission. Returns `None` while another one is running,
    /// while a result is displayed, while a file is loading, or when the
    /// body is empty.
    pub fn begin_submission(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }

        let ticket = Uuid::new_v4();
        self.phase = Phase::Submitting {
            ticket,
            model: self.form.model,
        };

        Some(Submission {
            ticket,
            request: self.form.to_request(),
        })
    }

    /// Stores the result of the request identified by `ticket`.
    /// Returns false for a ticket that is not the one in flight.
    pub fn complete_submission(
        &mut self,
        ticket: Uuid,
        result: Result<PredictionResult, ApiError>,
        analyzed_at: DateTime<Utc>,
    ) -> bool {
        let model = match self.phase {
            Phase::Submitting { ticket: current, model } if current == ticket => model,
            _ => return false,
        };

        let outcome = match result {
            Ok(result) => Outcome::Success(Analysis {
                result,
                model,
                analyzed_at,
            }),
            Err(err) => Outcome::Failure(err.user_message()),
        };
        self.phase = Phase::Finished(outcome);
        true
    }

    /// Dismissing the modal drops result and error, inputs stay
    pub fn close_modal(&mut self) {
        if self.is_modal_open() {
            self.phase = Phase::Idle;
        }
    }

    pub fn select_file(&mut self, meta: FileMeta) -> FileDecision {
        if self.is_submitting() {
            return FileDecision::Ignored;
        }

        match file_check::validate(&meta) {
            Ok(()) => {
                let selected = SelectedFile {
                    id: Uuid::new_v4(),
                    name: meta.name,
                    size_bytes: meta.size_bytes,
                };
                self.selected_file = Some(selected.clone());
                self.reading = Some(selected.id);
                FileDecision::Accepted(selected)
            }
            Err(err) => {
                let message = err.user_message();
                self.selected_file = None;
                self.reading = None;
                self.phase = Phase::Finished(Outcome::Failure(message.clone()));
                FileDecision::Rejected(message)
            }
        }
    }

    /// Overwrites the body with the text of the current selection
    pub fn apply_file_text(&mut self, id: Uuid, text: String) -> bool {
        self.finish_read(id);
        if !self.is_current_file(id) {
            return false;
        }
        self.form.body = text;
        true
    }

    /// Drops the selection and shows the error. No submission can be
    /// running here since submits wait for the read.
    pub fn fail_file_read(&mut self, id: Uuid, err: ApiError) -> bool {
        self.finish_read(id);
        if !self.is_current_file(id) {
            return false;
        }
        self.selected_file = None;
        self.phase = Phase::Finished(Outcome::Failure(err.user_message()));
        true
    }

    /// Removes the file and blanks sender, subject and body.
    /// The model choice is kept.
    pub fn clear_file(&mut self) {
        self.selected_file = None;
        self.reading = None;
        self.form.sender.clear();
        self.form.subject.clear();
        self.form.body.clear();
    }

    fn finish_read(&mut self, id: Uuid) {
        if self.reading == Some(id) {
            self.reading = None;
        }
    }

    fn is_current_file(&self, id: Uuid) -> bool {
        self.selected_file.as_ref().map(|f| f.id) == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::EmailLabel;
    use contracts::usecases::u101_check_email::ExplanationEntry;

    fn filled_state() -> DetectorState {
        let mut state = DetectorState::default();
        state.form.sender = "security@paypa1.example".to_string();
        state.form.subject = "Account suspended".to_string();
        state.form.body = "Click here to restore access".to_string();
        state.form.model = ModelChoice::BertMini;
        state
    }

    fn phishing_result() -> PredictionResult {
        PredictionResult {
            prediction: "Phishing".to_string(),
            label: EmailLabel::Phishing,
            confidence: 0.97,
            explanation: vec![ExplanationEntry::new("click", 0.12)],
        }
    }

    fn meta(name: &str, mime_type: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes: 128,
        }
    }

    #[test]
    fn test_submit_requires_body() {
        let mut state = DetectorState::default();
        state.form.subject = "Hello".to_string();
        assert!(!state.can_submit());
        assert!(state.begin_submission().is_none());
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_single_submission_matches_form() {
        let mut state = filled_state();

        let submission = state.begin_submission().expect("admitted");
        assert_eq!(
            submission.request,
            PredictionRequest {
                subject: "Account suspended".to_string(),
                sender: "security@paypa1.example".to_string(),
                body: "Click here to restore access".to_string(),
                model_choice: ModelChoice::BertMini,
            }
        );
        assert!(state.is_submitting());
        assert!(!state.is_modal_open());

        // duplicate submit while in flight
        assert!(state.begin_submission().is_none());
    }

    #[test]
    fn test_success_opens_modal() {
        let mut state = filled_state();
        let submission = state.begin_submission().unwrap();
        let now = Utc::now();

        assert!(state.complete_submission(submission.ticket, Ok(phishing_result()), now));
        assert!(state.is_modal_open());
        match state.outcome() {
            Some(Outcome::Success(analysis)) => {
                assert_eq!(analysis.result, phishing_result());
                assert_eq!(analysis.model, ModelChoice::BertMini);
                assert_eq!(analysis.analyzed_at, now);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_failures_open_modal_without_result() {
        let failures = vec![
            ApiError::status(500, "Internal Server Error"),
            ApiError::Service("Model/Preprocessor not loaded. Check server logs.".to_string()),
            ApiError::Network("Failed to fetch".to_string()),
            ApiError::Network(String::new()),
        ];

        for err in failures {
            let mut state = filled_state();
            let submission = state.begin_submission().unwrap();
            assert!(state.complete_submission(submission.ticket, Err(err), Utc::now()));

            assert!(state.is_modal_open());
            match state.outcome() {
                Some(Outcome::Failure(message)) => assert!(!message.is_empty()),
                other => panic!("unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut state = filled_state();
        let _submission = state.begin_submission().unwrap();

        assert!(!state.complete_submission(Uuid::new_v4(), Ok(phishing_result()), Utc::now()));
        assert!(state.is_submitting());
    }

    #[test]
    fn test_close_modal_returns_to_idle_and_keeps_inputs() {
        let mut state = filled_state();
        let submission = state.begin_submission().unwrap();
        state.complete_submission(submission.ticket, Ok(phishing_result()), Utc::now());

        state.close_modal();
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.is_modal_open());
        assert!(state.outcome().is_none());
        assert_eq!(state.form.body, "Click here to restore access");
        assert!(state.can_submit());

        let submission = state.begin_submission().unwrap();
        state.complete_submission(submission.ticket, Err(ApiError::status(404, "Not Found")), Utc::now());
        state.close_modal();
        assert!(state.outcome().is_none());
        assert!(!state.is_modal_open());
    }

    #[test]
    fn test_close_modal_does_not_cancel_submission() {
        let mut state = filled_state();
        state.begin_submission().unwrap();
        state.close_modal();
        assert!(state.is_submitting());
    }

    #[test]
    fn test_no_submit_while_modal_open() {
        let mut state = filled_state();
        let submission = state.begin_submission().unwrap();
        state.complete_submission(submission.ticket, Ok(phishing_result()), Utc::now());
        assert!(!state.can_submit());
        assert!(state.begin_submission().is_none());
    }

    #[test]
    fn test_accepted_file_overwrites_body() {
        let mut state = filled_state();
        let selected = match state.select_file(meta("x.TXT", "")) {
            FileDecision::Accepted(selected) => selected,
            other => panic!("unexpected decision {:?}", other),
        };
        assert_eq!(state.selected_file.as_ref(), Some(&selected));
        assert!(!state.is_modal_open());

        assert!(state.apply_file_text(selected.id, "Dear user, verify now".to_string()));
        assert_eq!(state.form.body, "Dear user, verify now");
    }

    #[test]
    fn test_rejected_file_leaves_body() {
        let mut state = filled_state();
        let decision = state.select_file(meta("x.pdf", "application/pdf"));

        match decision {
            FileDecision::Rejected(message) => assert!(message.contains("pdf")),
            other => panic!("unexpected decision {:?}", other),
        }
        assert!(state.selected_file.is_none());
        assert_eq!(state.form.body, "Click here to restore access");
        assert!(matches!(state.outcome(), Some(Outcome::Failure(m)) if m.contains(".pdf")));

        state.close_modal();
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_stale_file_read_ignored() {
        let mut state = DetectorState::default();
        let first = match state.select_file(meta("a.txt", "text/plain")) {
            FileDecision::Accepted(selected) => selected,
            other => panic!("unexpected decision {:?}", other),
        };
        let second = match state.select_file(meta("b.csv", "text/csv")) {
            FileDecision::Accepted(selected) => selected,
            other => panic!("unexpected decision {:?}", other),
        };

        assert!(!state.apply_file_text(first.id, "old".to_string()));
        assert!(state.form.body.is_empty());
        assert!(state.apply_file_text(second.id, "new".to_string()));
        assert_eq!(state.form.body, "new");
    }

    #[test]
    fn test_file_read_failure() {
        let mut state = DetectorState::default();
        let selected = match state.select_file(meta("a.txt", "text/plain")) {
            FileDecision::Accepted(selected) => selected,
            other => panic!("unexpected decision {:?}", other),
        };

        assert!(state.fail_file_read(selected.id, ApiError::FileRead("NotReadableError".to_string())));
        assert!(state.selected_file.is_none());
        assert_eq!(
            state.outcome(),
            Some(&Outcome::Failure("Could not read the selected file.".to_string()))
        );
    }

    #[test]
    fn test_file_events_ignored_while_submitting() {
        let mut state = filled_state();
        state.begin_submission().unwrap();
        assert_eq!(state.select_file(meta("x.pdf", "")), FileDecision::Ignored);
        assert!(state.is_submitting());
    }

    #[test]
    fn test_no_submit_while_file_loading() {
        let mut state = filled_state();
        let selected = match state.select_file(meta("a.txt", "text/plain")) {
            FileDecision::Accepted(selected) => selected,
            other => panic!("unexpected decision {:?}", other),
        };

        assert!(state.is_reading_file());
        assert!(!state.can_submit());
        assert!(state.begin_submission().is_none());

        assert!(state.apply_file_text(selected.id, "Verify your account".to_string()));
        assert!(!state.is_reading_file());
        let submission = state.begin_submission().expect("admitted after the read");
        assert_eq!(submission.request.body, "Verify your account");
    }

    #[test]
    fn test_read_failure_shown_before_any_submission() {
        let mut state = filled_state();
        let selected = match state.select_file(meta("a.txt", "text/plain")) {
            FileDecision::Accepted(selected) => selected,
            other => panic!("unexpected decision {:?}", other),
        };
        assert!(state.begin_submission().is_none());

        assert!(state.fail_file_read(selected.id, ApiError::FileRead("NotReadableError".to_string())));
        assert_eq!(
            state.outcome(),
            Some(&Outcome::Failure("Could not read the selected file.".to_string()))
        );

        state.close_modal();
        assert!(state.can_submit());
    }

    #[test]
    fn test_read_of_dropped_selection_unblocks_submit() {
        let mut state = filled_state();
        let selected = match state.select_file(meta("a.txt", "text/plain")) {
            FileDecision::Accepted(selected) => selected,
            other => panic!("unexpected decision {:?}", other),
        };
        // picker dismissed while the read runs
        state.selected_file = None;
        assert!(!state.can_submit());

        assert!(!state.apply_file_text(selected.id, "late".to_string()));
        assert_eq!(state.form.body, "Click here to restore access");
        assert!(state.can_submit());
    }

    #[test]
    fn test_malformed_sender_still_submits() {
        for sender in ["PayPal Security <security@paypal.com>", "security@", "paypa1 support"] {
            let mut state = filled_state();
            state.form.sender = sender.to_string();
            let submission = state.begin_submission().expect("admitted");
            assert_eq!(submission.request.sender, sender);
        }
    }

    #[test]
    fn test_clear_file_blanks_text_fields() {
        let mut state = filled_state();
        state.select_file(meta("x.csv", "text/csv"));

        state.clear_file();
        assert!(state.selected_file.is_none());
        assert!(state.form.sender.is_empty());
        assert!(state.form.subject.is_empty());
        assert!(state.form.body.is_empty());
        assert_eq!(state.form.model, ModelChoice::BertMini);
    }
}
