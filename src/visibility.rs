//! Visibility state machine for the typeahead panel.
//!
//! The panel is visible only while the search control retains logical focus
//! and the term is non-empty. Transitions are pure: the machine consumes an
//! interaction event plus the current term emptiness and returns the next
//! state, which makes the whole table directly testable.

/// Whether the inline-results panel is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// User interactions the panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    /// Focus landed inside the search control's subtree.
    FocusInside,
    /// A pointer press anywhere in the document; `inside` is whether the
    /// press target was within the control's subtree.
    PointerDown { inside: bool },
    /// The term was edited while the control held focus.
    TermEdited,
    /// Explicit clear of the term.
    Cleared,
    /// Successful full-text submission.
    Submitted,
    /// A suggestion was selected from the panel.
    SuggestionSelected,
}

impl Visibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    /// Advance the machine by one interaction event.
    #[must_use]
    pub fn on_event(self, event: InteractionEvent, term_is_empty: bool) -> Self {
        match event {
            InteractionEvent::FocusInside | InteractionEvent::PointerDown { inside: true } => {
                if term_is_empty {
                    self
                } else {
                    Visibility::Visible
                }
            }
            InteractionEvent::TermEdited => {
                // Typing implies focus inside the control; an emptied term
                // hides the panel even while focus remains.
                if term_is_empty {
                    Visibility::Hidden
                } else {
                    Visibility::Visible
                }
            }
            InteractionEvent::PointerDown { inside: false }
            | InteractionEvent::Cleared
            | InteractionEvent::Submitted
            | InteractionEvent::SuggestionSelected => Visibility::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(Visibility::default(), Visibility::Hidden);
    }

    #[test]
    fn focus_with_a_term_shows_the_panel() {
        let state = Visibility::Hidden.on_event(InteractionEvent::FocusInside, false);
        assert!(state.is_visible());
    }

    #[test]
    fn focus_with_an_empty_term_stays_hidden() {
        let state = Visibility::Hidden.on_event(InteractionEvent::FocusInside, true);
        assert_eq!(state, Visibility::Hidden);
    }

    #[test]
    fn outside_press_hides_the_panel() {
        let state =
            Visibility::Visible.on_event(InteractionEvent::PointerDown { inside: false }, false);
        assert_eq!(state, Visibility::Hidden);
    }

    #[test]
    fn inside_press_keeps_the_panel_visible() {
        let state =
            Visibility::Visible.on_event(InteractionEvent::PointerDown { inside: true }, false);
        assert!(state.is_visible());
    }

    #[test]
    fn emptying_the_term_hides_even_with_focus_inside() {
        let state = Visibility::Visible.on_event(InteractionEvent::TermEdited, true);
        assert_eq!(state, Visibility::Hidden);
    }

    #[test]
    fn editing_while_visible_stays_visible() {
        let state = Visibility::Visible.on_event(InteractionEvent::TermEdited, false);
        assert!(state.is_visible());
    }

    #[test]
    fn submit_and_selection_hide_the_panel() {
        assert_eq!(
            Visibility::Visible.on_event(InteractionEvent::Submitted, false),
            Visibility::Hidden
        );
        assert_eq!(
            Visibility::Visible.on_event(InteractionEvent::SuggestionSelected, false),
            Visibility::Hidden
        );
        assert_eq!(
            Visibility::Visible.on_event(InteractionEvent::Cleared, true),
            Visibility::Hidden
        );
    }
}
