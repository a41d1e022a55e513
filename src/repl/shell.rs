use super::command::{command_to_app_event, request_to_app_event};
use super::parser::{parse_markers, parse_menu_choice, parse_text};
use super::MenuCommand;
use crate::app::{App, AppEvent, AppMode};
use crate::ui::theme::Painter;
use crate::ui::view::{
    write_input_banner, write_marker_hint, write_menu, write_response, write_startup,
};
use log::debug;
use std::io::{self, BufRead, Write};

const CHOICE_PROMPT: &str = "\nEnter your choice (1-5): ";
const TEXT_PROMPT: &str = "\n📝 Enter your text: ";
const MARKER_PROMPT: &str = "Colour Codes: ";

/// Line-based menu loop over any reader and writer
///
/// End of input behaves like choosing quit.
pub struct Shell<R, W> {
    input: R,
    output: W,
    painter: Painter,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, painter: Painter) -> Self {
        Self {
            input,
            output,
            painter,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, app: &mut App) -> io::Result<()> {
        write_startup(&mut self.output, &self.painter, app.clipboard_capability())?;

        while app.mode() != AppMode::Quit {
            write_menu(&mut self.output, &self.painter)?;
            let event = match self.prompt(CHOICE_PROMPT)? {
                Some(line) => self.next_event(parse_menu_choice(&line))?,
                None => AppEvent::Quit,
            };

            let response = app.handle_event(event);
            write_response(&mut self.output, &self.painter, &app.config.display, &response)?;
            self.output.flush()?;
        }

        Ok(())
    }

    fn next_event(&mut self, command: MenuCommand) -> io::Result<AppEvent> {
        debug!("menu command {:?}", command);
        if !command.needs_operator_input() {
            return Ok(command_to_app_event(command).unwrap_or(AppEvent::Quit));
        }

        write_input_banner(&mut self.output, &self.painter)?;
        let Some(line) = self.prompt(TEXT_PROMPT)? else {
            return Ok(AppEvent::Quit);
        };
        let text = match parse_text(&line) {
            Ok(text) => text,
            Err(e) => return Ok(AppEvent::Rejected(e)),
        };

        write_marker_hint(&mut self.output, &self.painter)?;
        let Some(line) = self.prompt(MARKER_PROMPT)? else {
            return Ok(AppEvent::Quit);
        };
        let markers = match parse_markers(&line) {
            Ok(markers) => markers,
            Err(e) => return Ok(AppEvent::Rejected(e)),
        };

        Ok(request_to_app_event(&command, text, markers))
    }

    /// Writes `prompt` and reads one line; `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
