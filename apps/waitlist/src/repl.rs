//! Line commands standing in for the signup page, and panel rendering.

use client_core::{Key, UiEvent, UiState};

pub const HELP: &str = "\
commands:
  set <field> <value>   fill a form field (email, certified_diver, certified_instructor, mobile)
  clear <field>         remove a form field
  submit                submit the form
  esc | key <name>      press a key (only Escape dismisses panels)
  close success|error   click a panel's close button
  show                  print the panels
  help | quit";

#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Event(UiEvent),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match (verb, rest) {
        ("set", rest) => {
            let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if name.is_empty() {
                return Err("usage: set <field> <value>".into());
            }
            ReplCommand::Event(UiEvent::FieldChanged {
                name: name.to_string(),
                value: value.trim_start().to_string(),
            })
        }
        ("clear", name) if !name.is_empty() => ReplCommand::Event(UiEvent::FieldCleared {
            name: name.to_string(),
        }),
        ("submit", "") => ReplCommand::Event(UiEvent::Submit),
        ("esc" | "escape", "") => ReplCommand::Event(UiEvent::KeyDown(Key::Escape)),
        ("key", name) if !name.is_empty() => {
            ReplCommand::Event(UiEvent::KeyDown(Key::from_name(name)))
        }
        ("close", "success") => ReplCommand::Event(UiEvent::CloseSuccess),
        ("close", "error") => ReplCommand::Event(UiEvent::CloseError),
        ("show", "") => ReplCommand::Show,
        ("help", "") => ReplCommand::Help,
        ("quit" | "exit", "") => ReplCommand::Quit,
        _ => return Err(format!("unrecognized command '{line}'; type 'help'")),
    };
    Ok(command)
}

pub fn render_panels(ui: &UiState) -> Vec<String> {
    let mut lines = Vec::new();
    if ui.success().is_visible() {
        lines.push(format!("[success] {} is on the waitlist", ui.success().text()));
    }
    if ui.error().is_visible() {
        lines.push(format!("[error] {}", ui.error().text()));
    }
    if lines.is_empty() {
        lines.push("(no message shown)".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_edits() {
        assert_eq!(
            parse_command("set email  user@example.com"),
            Ok(ReplCommand::Event(UiEvent::FieldChanged {
                name: "email".into(),
                value: "user@example.com".into(),
            }))
        );
        assert_eq!(
            parse_command("set mobile"),
            Ok(ReplCommand::Event(UiEvent::FieldChanged {
                name: "mobile".into(),
                value: String::new(),
            }))
        );
        assert_eq!(
            parse_command("clear mobile"),
            Ok(ReplCommand::Event(UiEvent::FieldCleared {
                name: "mobile".into()
            }))
        );
    }

    #[test]
    fn parses_keys_and_close_buttons() {
        assert_eq!(
            parse_command("esc"),
            Ok(ReplCommand::Event(UiEvent::KeyDown(Key::Escape)))
        );
        assert_eq!(
            parse_command("key Tab"),
            Ok(ReplCommand::Event(UiEvent::KeyDown(Key::Other("Tab".into()))))
        );
        assert_eq!(
            parse_command(" close error "),
            Ok(ReplCommand::Event(UiEvent::CloseError))
        );
        assert_eq!(parse_command("quit"), Ok(ReplCommand::Quit));
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(parse_command("close both").is_err());
        assert!(parse_command("set").is_err());
        assert!(parse_command("launch").is_err());
    }

    #[test]
    fn renders_visible_panels() {
        let mut ui = UiState::default();
        assert_eq!(render_panels(&ui), vec!["(no message shown)".to_string()]);

        ui.show_success("user@example.com");
        ui.show_error("Email already registered");
        assert_eq!(
            render_panels(&ui),
            vec![
                "[success] user@example.com is on the waitlist".to_string(),
                "[error] Email already registered".to_string(),
            ]
        );
    }
}
