use url::Url;

use crate::state::NO_ANSWER_PLACEHOLDER;
use crate::view_model::ToastKind;
use crate::{AppState, Effect, Msg, Operation};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(text) => {
            state.set_url(text);
            Vec::new()
        }
        Msg::MaxDepthChanged(depth) => {
            state.set_max_depth(depth);
            Vec::new()
        }
        Msg::QuestionChanged(text) => {
            state.set_question(text);
            Vec::new()
        }
        Msg::IngestSubmitted => {
            // Triggers are disabled while any operation is loading.
            if state.in_flight().is_some() {
                return (state, Vec::new());
            }
            let url = state.url().trim().to_owned();
            match Url::parse(&url) {
                Ok(_) => {
                    let max_depth = state.max_depth();
                    state.begin(Operation::Ingest);
                    vec![Effect::IngestUrl { url, max_depth }]
                }
                Err(err) => {
                    state.set_error(format!("Invalid URL: {err}"));
                    Vec::new()
                }
            }
        }
        Msg::AskSubmitted => {
            if state.in_flight().is_some() {
                return (state, Vec::new());
            }
            let question = state.question().trim().to_owned();
            if question.is_empty() {
                state.set_error("Question must not be empty.".to_owned());
                return (state, Vec::new());
            }
            state.begin(Operation::Ask);
            vec![Effect::AskQuestion { question }]
        }
        Msg::ResetClicked => {
            if state.in_flight().is_some() {
                return (state, Vec::new());
            }
            // `begin` clears the answer, so the displayed answer is gone
            // before the reset outcome is known.
            state.begin(Operation::Reset);
            vec![Effect::ResetEmbeddings]
        }
        Msg::IngestFinished(result) => {
            if state.in_flight() != Some(Operation::Ingest) {
                return (state, Vec::new());
            }
            state.finish();
            match result {
                Ok(outcome) => {
                    let text = match outcome.message {
                        Some(message) if !message.is_empty() => {
                            format!("URL ingested successfully. {message}")
                        }
                        _ => "URL ingested successfully.".to_owned(),
                    };
                    state.push_toast(ToastKind::Success, text);
                }
                Err(message) => state.report_failure(Operation::Ingest, &message),
            }
            Vec::new()
        }
        Msg::AskFinished(result) => {
            if state.in_flight() != Some(Operation::Ask) {
                return (state, Vec::new());
            }
            state.finish();
            match result {
                Ok(outcome) => {
                    let answer = match outcome.answer {
                        Some(answer) if !answer.trim().is_empty() => answer,
                        _ => NO_ANSWER_PLACEHOLDER.to_owned(),
                    };
                    state.set_answer(answer);
                }
                Err(message) => state.report_failure(Operation::Ask, &message),
            }
            Vec::new()
        }
        Msg::ResetFinished(result) => {
            if state.in_flight() != Some(Operation::Reset) {
                return (state, Vec::new());
            }
            state.finish();
            match result {
                Ok(()) => {
                    state.push_toast(
                        ToastKind::Success,
                        "Embeddings reset successfully.".to_owned(),
                    );
                }
                Err(message) => state.report_failure(Operation::Reset, &message),
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
