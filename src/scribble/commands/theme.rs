use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(Theme),
    Toggle,
}

pub fn run<S: DataStore>(store: &mut S, action: ThemeAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let current = store.theme()?;

    let theme = match action {
        ThemeAction::Show => current,
        ThemeAction::Set(theme) => theme,
        ThemeAction::Toggle => current.toggled(),
    };

    if action != ThemeAction::Show {
        store.set_theme(theme)?;
        result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
    }

    result.theme = Some(theme);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn show_reports_light_by_default() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, ThemeAction::Show).unwrap();
        assert_eq!(result.theme, Some(Theme::Light));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut store = InMemoryStore::new();
        run(&mut store, ThemeAction::Toggle).unwrap();
        assert_eq!(store.theme().unwrap(), Theme::Dark);
        assert_eq!(store.backend().raw_record("darkMode").as_deref(), Some("true"));

        let result = run(&mut store, ThemeAction::Toggle).unwrap();
        assert_eq!(result.theme, Some(Theme::Light));
    }

    #[test]
    fn set_is_idempotent() {
        let mut store = InMemoryStore::new();
        run(&mut store, ThemeAction::Set(Theme::Dark)).unwrap();
        let result = run(&mut store, ThemeAction::Set(Theme::Dark)).unwrap();
        assert_eq!(result.theme, Some(Theme::Dark));
        assert_eq!(result.messages[0].content, "Theme set to dark");
    }
}
