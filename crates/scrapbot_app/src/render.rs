//! Plain-terminal rendering of the view model: toast lines, the error
//! banner, and the currently displayed answer.

use std::io::Write;

use scrapbot_core::{AppViewModel, Toast, ToastKind};

pub fn toasts(toasts: &[Toast]) {
    for toast in toasts {
        match toast.kind {
            ToastKind::Success => println!("ok: {}", toast.text),
            ToastKind::Error => eprintln!("error: {}", toast.text),
        }
    }
}

/// Printed after an operation settles: the persistent error banner and the
/// currently displayed answer. Failures appear here in addition to the toast
/// emitted at completion time.
pub fn outcome(view: &AppViewModel) {
    let (error_line, answer_line) = outcome_lines(view);
    if let Some(line) = error_line {
        eprintln!("{line}");
    }
    if let Some(line) = answer_line {
        println!("{line}");
    }
}

fn outcome_lines(view: &AppViewModel) -> (Option<String>, Option<String>) {
    (
        view.error.as_ref().map(|error| format!("error: {error}")),
        view.answer.as_ref().map(|answer| format!("Answer: {answer}")),
    )
}

/// Full state snapshot for the shell's `status` command.
pub fn status(view: &AppViewModel) {
    println!("base inputs:");
    println!("  url:       {}", view.url);
    println!("  max depth: {}", view.max_depth);
    println!("  question:  {}", view.question);
    if view.loading {
        println!("loading: {:?}", view.in_flight);
    }
    match &view.error {
        Some(error) => println!("error: {error}"),
        None => println!("error: none"),
    }
    match &view.answer {
        Some(answer) => println!("answer: {answer}"),
        None => println!("answer: none"),
    }
}

pub fn shell_banner(base_url: &str) {
    println!("scrapbot shell (backend {base_url})");
    println!("commands: ingest <url> [max-depth] | ask <question> | reset | status | quit");
}

pub fn prompt() -> std::io::Result<()> {
    print!("scrapbot> ");
    std::io::stdout().flush()
}

pub fn usage(text: &str) {
    println!("usage: {text}");
}

pub fn help() {
    println!("commands: ingest <url> [max-depth] | ask <question> | reset | status | quit");
}

#[cfg(test)]
mod tests {
    use scrapbot_core::{update, AppState, AskOutcome, Msg};

    use super::outcome_lines;

    #[test]
    fn empty_question_renders_an_error_banner_line() {
        let (state, _) = update(AppState::new(), Msg::AskSubmitted);
        let (error_line, answer_line) = outcome_lines(&state.view());

        assert_eq!(
            error_line.as_deref(),
            Some("error: Question must not be empty.")
        );
        assert_eq!(answer_line, None);
    }

    #[test]
    fn invalid_url_renders_an_error_banner_line() {
        let (state, _) = update(AppState::new(), Msg::UrlChanged("not a url".to_string()));
        let (state, _) = update(state, Msg::IngestSubmitted);
        let (error_line, _) = outcome_lines(&state.view());

        assert!(error_line.unwrap().starts_with("error: Invalid URL:"));
    }

    #[test]
    fn answer_renders_without_banner() {
        let (state, _) = update(AppState::new(), Msg::QuestionChanged("q".to_string()));
        let (state, _) = update(state, Msg::AskSubmitted);
        let (state, _) = update(
            state,
            Msg::AskFinished(Ok(AskOutcome {
                answer: Some("42".to_string()),
            })),
        );
        let (error_line, answer_line) = outcome_lines(&state.view());

        assert_eq!(error_line, None);
        assert_eq!(answer_line.as_deref(), Some("Answer: 42"));
    }
}
