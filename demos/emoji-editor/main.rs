//! Runs the emoji text box full screen.
//!
//! Text persists to the platform data directory. Set `RUST_LOG=debug` to
//! write a trace to `emoji-editor.log` in the working directory.
//! `EMOJI_THEME=light|dark` overrides the automatic theme.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use emoji_textbox::prelude::*;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

struct App {
    editor: Editor,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let theme = std::env::var("EMOJI_THEME")
            .ok()
            .and_then(|name| Theme::from_name(&name))
            .unwrap_or_default();
        let mut editor = Editor::with_system_defaults(Config::default().with_theme(theme));
        let cmd = editor.focus();
        (Self { editor }, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if key.key == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(quit());
            }
        }
        self.editor.update(msg)
    }

    fn view(&self) -> String {
        format!("{}\n\nctrl+c quit", self.editor.view())
    }
}

fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let file = match File::create("emoji-editor.log") {
        Ok(file) => file,
        Err(err) => {
            eprintln!("could not open log file: {err}");
            return;
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    tracing::info!("starting emoji editor");

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
