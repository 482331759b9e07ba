use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::msg::Msg;
use crate::presentation::config::keybindings::{Action, KeyBindings};

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Overlay hidden
    Landing,
    /// List panel; `confirming` while a delete prompt is open
    List { confirming: bool },
    Editor,
}

/// Where a key press should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRoute {
    Msg(Msg),
    List,
    Editor,
    Ignore,
}

/// Decides what a key press means in the given context.
/// This function is pure and contains no side effects.
pub fn translate_key(key: KeyEvent, context: KeyContext, bindings: &KeyBindings) -> KeyRoute {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return KeyRoute::Msg(Msg::Quit),
        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return KeyRoute::Msg(Msg::Suspend),
        _ => {}
    }

    match context {
        KeyContext::Landing => bindings
            .action_for(&key)
            .and_then(landing_msg)
            .map_or(KeyRoute::Ignore, KeyRoute::Msg),
        // the prompt swallows every key, bound or not
        KeyContext::List { confirming: true } => KeyRoute::List,
        KeyContext::List { confirming: false } => bindings
            .action_for(&key)
            .map_or(KeyRoute::List, |action| KeyRoute::Msg(overlay_msg(action))),
        KeyContext::Editor => {
            if is_text_input(&key) {
                return KeyRoute::Editor;
            }
            bindings
                .action_for(&key)
                .map_or(KeyRoute::Editor, |action| KeyRoute::Msg(overlay_msg(action)))
        }
    }
}

fn landing_msg(action: Action) -> Option<Msg> {
    match action {
        Action::OpenList => Some(Msg::OpenList),
        Action::AddUser => Some(Msg::StartCreate),
        Action::Quit => Some(Msg::Quit),
        Action::Suspend => Some(Msg::Suspend),
        Action::Close | Action::TogglePanel => None,
    }
}

fn overlay_msg(action: Action) -> Msg {
    match action {
        Action::OpenList => Msg::OpenList,
        Action::AddUser => Msg::StartCreate,
        Action::Close => Msg::Close,
        Action::TogglePanel => Msg::TogglePanel,
        Action::Quit => Msg::Quit,
        Action::Suspend => Msg::Suspend,
    }
}

/// Keys that type into a field and must never trigger a binding while the
/// editor has focus.
fn is_text_input(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && (key.modifiers - KeyModifiers::SHIFT).is_empty()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::infrastructure::config::Config;

    #[fixture]
    fn bindings() -> KeyBindings {
        Config::embedded()
            .map(|cfg| cfg.keybindings)
            .unwrap_or_default()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[rstest]
    #[case(KeyContext::Landing)]
    #[case(KeyContext::List { confirming: false })]
    #[case(KeyContext::List { confirming: true })]
    #[case(KeyContext::Editor)]
    fn test_global_keys(bindings: KeyBindings, #[case] context: KeyContext) {
        assert_eq!(
            translate_key(ctrl('c'), context, &bindings),
            KeyRoute::Msg(Msg::Quit)
        );
        assert_eq!(
            translate_key(ctrl('z'), context, &bindings),
            KeyRoute::Msg(Msg::Suspend)
        );
    }

    #[rstest]
    #[case(key(KeyCode::Char('o')), KeyRoute::Msg(Msg::OpenList))]
    #[case(key(KeyCode::Char('a')), KeyRoute::Msg(Msg::StartCreate))]
    #[case(key(KeyCode::Char('q')), KeyRoute::Msg(Msg::Quit))]
    #[case(key(KeyCode::Esc), KeyRoute::Ignore)]
    #[case(key(KeyCode::Char('x')), KeyRoute::Ignore)]
    fn test_landing(bindings: KeyBindings, #[case] input: KeyEvent, #[case] expected: KeyRoute) {
        assert_eq!(translate_key(input, KeyContext::Landing, &bindings), expected);
    }

    #[rstest]
    #[case(key(KeyCode::Esc), KeyRoute::Msg(Msg::Close))]
    #[case(key(KeyCode::Char('a')), KeyRoute::Msg(Msg::StartCreate))]
    #[case(ctrl('t'), KeyRoute::Msg(Msg::TogglePanel))]
    #[case(key(KeyCode::Char('j')), KeyRoute::List)]
    #[case(key(KeyCode::Char('d')), KeyRoute::List)]
    #[case(key(KeyCode::Enter), KeyRoute::List)]
    fn test_list(bindings: KeyBindings, #[case] input: KeyEvent, #[case] expected: KeyRoute) {
        assert_eq!(
            translate_key(input, KeyContext::List { confirming: false }, &bindings),
            expected
        );
    }

    #[rstest]
    fn test_list_confirmation_swallows_bindings(bindings: KeyBindings) {
        let context = KeyContext::List { confirming: true };
        assert_eq!(translate_key(key(KeyCode::Esc), context, &bindings), KeyRoute::List);
        assert_eq!(
            translate_key(key(KeyCode::Char('q')), context, &bindings),
            KeyRoute::List
        );
    }

    #[rstest]
    #[case(key(KeyCode::Char('q')), KeyRoute::Editor)]
    #[case(key(KeyCode::Char('a')), KeyRoute::Editor)]
    #[case(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT), KeyRoute::Editor)]
    #[case(key(KeyCode::Tab), KeyRoute::Editor)]
    #[case(ctrl('s'), KeyRoute::Editor)]
    #[case(key(KeyCode::Esc), KeyRoute::Msg(Msg::Close))]
    #[case(ctrl('t'), KeyRoute::Msg(Msg::TogglePanel))]
    fn test_editor(bindings: KeyBindings, #[case] input: KeyEvent, #[case] expected: KeyRoute) {
        assert_eq!(translate_key(input, KeyContext::Editor, &bindings), expected);
    }
}
