use std::io::BufRead;
use std::time::Duration;

use client_logging::client_warn;
use scrapbot_core::{update, AppState, AskOutcome, Effect, IngestOutcome, Msg};
use scrapbot_gateway::{GatewayCommand, GatewayEvent, GatewayHandle, GatewaySettings};

use crate::config::{self, AppConfig};
use crate::render;

/// How long the frontend waits for a gateway completion before giving up on
/// this pump round. The request itself is not cancelled and its event is
/// picked up later.
const EVENT_WAIT: Duration = Duration::from_secs(120);

pub struct App {
    state: AppState,
    handle: GatewayHandle,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::with_inputs(&config.url, config.max_depth, &config.question),
            handle: GatewayHandle::new(GatewaySettings::with_base_url(&config.base_url)),
        }
    }

    pub fn run_ingest(&mut self, url: String, max_depth: u32) -> anyhow::Result<()> {
        self.dispatch(Msg::UrlChanged(url));
        self.dispatch(Msg::MaxDepthChanged(max_depth));
        self.dispatch(Msg::IngestSubmitted);
        self.pump_until_idle();
        self.finish()
    }

    pub fn run_ask(&mut self, question: String) -> anyhow::Result<()> {
        self.dispatch(Msg::QuestionChanged(question));
        self.dispatch(Msg::AskSubmitted);
        self.pump_until_idle();
        self.finish()
    }

    pub fn run_reset(&mut self) -> anyhow::Result<()> {
        self.dispatch(Msg::ResetClicked);
        self.pump_until_idle();
        self.finish()
    }

    pub fn run_shell(&mut self, config: &mut AppConfig) -> anyhow::Result<()> {
        render::shell_banner(&config.base_url);
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            // Pick up completions a previous round may have left behind.
            while let Some(event) = self.handle.try_recv() {
                self.dispatch(msg_for_event(event));
            }

            render::prompt()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let input = line.trim();
            let (verb, rest) = match input.split_once(char::is_whitespace) {
                Some((verb, rest)) => (verb, rest.trim()),
                None => (input, ""),
            };

            match verb {
                "" => continue,
                "quit" | "exit" => break,
                "status" => render::status(&self.state.view()),
                "ingest" => {
                    let (url, depth) = match rest.split_once(char::is_whitespace) {
                        Some((url, depth)) => match depth.trim().parse::<u32>() {
                            Ok(depth) => (url.to_string(), Some(depth)),
                            Err(_) => {
                                render::usage("ingest <url> [max-depth]");
                                continue;
                            }
                        },
                        None => (rest.to_string(), None),
                    };
                    if url.is_empty() {
                        render::usage("ingest <url> [max-depth]");
                        continue;
                    }
                    self.dispatch(Msg::UrlChanged(url));
                    if let Some(depth) = depth {
                        self.dispatch(Msg::MaxDepthChanged(depth));
                    }
                    self.dispatch(Msg::IngestSubmitted);
                    self.pump_until_idle();
                    self.render_outcome();
                }
                "ask" => {
                    self.dispatch(Msg::QuestionChanged(rest.to_string()));
                    self.dispatch(Msg::AskSubmitted);
                    self.pump_until_idle();
                    self.render_outcome();
                }
                "reset" => {
                    self.dispatch(Msg::ResetClicked);
                    self.pump_until_idle();
                    self.render_outcome();
                }
                _ => render::help(),
            }
        }

        // Remember the last-used inputs for the next session.
        let view = self.state.view();
        config.url = view.url;
        config.max_depth = view.max_depth;
        config.question = view.question;
        config::save(config);
        Ok(())
    }

    /// Applies one message, forwards any resulting effects to the gateway,
    /// and prints toasts the update produced.
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        for effect in effects {
            self.handle.submit(command_for_effect(effect));
        }
        let toasts = state.take_toasts();
        self.state = state;
        render::toasts(&toasts);
    }

    /// Feeds gateway completions back into the state machine until no
    /// operation is in flight.
    fn pump_until_idle(&mut self) {
        while self.state.view().loading {
            match self.handle.recv_timeout(EVENT_WAIT) {
                Some(event) => self.dispatch(msg_for_event(event)),
                None => {
                    client_warn!("no gateway completion within {:?}; still waiting", EVENT_WAIT);
                }
            }
        }
    }

    /// Renders the settled view, coalesced on the dirty flag: nothing is
    /// printed when no dispatch changed the state since the last render.
    fn render_outcome(&mut self) {
        if self.state.consume_dirty() {
            render::outcome(&self.state.view());
        }
    }

    /// One-shot mode exit: the error banner becomes a nonzero exit code.
    fn finish(&mut self) -> anyhow::Result<()> {
        self.render_outcome();
        let view = self.state.view();
        if let Some(error) = view.error {
            anyhow::bail!(error);
        }
        Ok(())
    }
}

fn command_for_effect(effect: Effect) -> GatewayCommand {
    match effect {
        Effect::IngestUrl { url, max_depth } => GatewayCommand::Ingest { url, max_depth },
        Effect::AskQuestion { question } => GatewayCommand::Ask { question },
        Effect::ResetEmbeddings => GatewayCommand::Reset,
    }
}

fn msg_for_event(event: GatewayEvent) -> Msg {
    match event {
        GatewayEvent::IngestFinished(result) => Msg::IngestFinished(
            result
                .map(|receipt| IngestOutcome {
                    message: receipt.message,
                })
                .map_err(|err| err.to_string()),
        ),
        GatewayEvent::AskFinished(result) => Msg::AskFinished(
            result
                .map(|reply| AskOutcome {
                    answer: reply.answer,
                })
                .map_err(|err| err.to_string()),
        ),
        GatewayEvent::ResetFinished(result) => {
            Msg::ResetFinished(result.map_err(|err| err.to_string()))
        }
    }
}
