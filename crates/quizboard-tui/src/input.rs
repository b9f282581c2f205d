use crate::ui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quizboard_core::DifficultyFilter;

/// What the runtime should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// A filter (or the view) changed; run a fresh fetch cycle.
    Refetch,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        KeyCode::Tab => {
            app.toggle_view();
            Action::Refetch
        }

        KeyCode::Char('0') => difficulty(app, DifficultyFilter::All),
        KeyCode::Char('1') => difficulty(app, DifficultyFilter::Easy),
        KeyCode::Char('2') => difficulty(app, DifficultyFilter::Medium),
        KeyCode::Char('3') => difficulty(app, DifficultyFilter::Difficult),

        KeyCode::Char('d') => refetch_if(app.cycle_domain()),
        KeyCode::Char('s') => refetch_if(app.cycle_bucket()),
        KeyCode::Char('r') => Action::Refetch,

        _ => Action::None,
    }
}

fn difficulty(app: &mut App, difficulty: DifficultyFilter) -> Action {
    refetch_if(app.set_difficulty(difficulty))
}

fn refetch_if(changed: bool) -> Action {
    if changed {
        Action::Refetch
    } else {
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::View;
    use quizboard_core::DomainFilter;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(View::Board, false);
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Action::Quit
        );
    }

    #[test]
    fn difficulty_keys_trigger_refetch_only_on_change() {
        let mut app = App::new(View::Board, false);
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('1'))),
            Action::Refetch
        );
        assert_eq!(app.filters.difficulty, DifficultyFilter::Easy);
        // Same difficulty again is a no-op.
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('1'))), Action::None);
    }

    #[test]
    fn domain_key_is_inert_until_selector_revealed() {
        let mut app = App::new(View::Board, false);
        app.unique_domains = vec!["math".to_string()];
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('d'))), Action::None);

        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('d'))),
            Action::Refetch
        );
        assert_eq!(app.filters.domain, DomainFilter::Named("math".to_string()));
    }

    #[test]
    fn bucket_key_refetches_in_profiles_view() {
        let mut app = App::new(View::Profiles, false);
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('s'))),
            Action::Refetch
        );
    }

    #[test]
    fn tab_toggles_view_and_refetches() {
        let mut app = App::new(View::Board, false);
        assert_eq!(handle_key(&mut app, press(KeyCode::Tab)), Action::Refetch);
        assert_eq!(app.view, View::Profiles);
    }
}
