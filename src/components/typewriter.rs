use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterState {
    text: String,
    shown: usize,
}

pub enum TypewriterAction {
    Tick,
    Restart(String),
}

impl TypewriterState {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            shown: 0,
        }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    /// The revealed prefix, cut on a character boundary.
    pub fn visible(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.shown)
            .map_or(self.text.len(), |(index, _)| index);
        &self.text[..end]
    }

    fn apply(&self, action: TypewriterAction) -> Option<Self> {
        match action {
            TypewriterAction::Tick if self.is_finished() => None,
            TypewriterAction::Tick => Some(Self {
                text: self.text.clone(),
                shown: self.shown + 1,
            }),
            TypewriterAction::Restart(text) if text == self.text => None,
            TypewriterAction::Restart(text) => Some(Self { text, shown: 0 }),
        }
    }
}

impl Reducible for TypewriterState {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: AttrValue,
    /// Delay between characters in milliseconds.
    #[prop_or(100)]
    pub speed: u32,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let state = use_reducer({
        let text = props.text.clone();
        move || TypewriterState::new(&text)
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |text: &AttrValue| {
                dispatcher.dispatch(TypewriterAction::Restart(text.to_string()));
                || ()
            },
            props.text.clone(),
        );
    }

    {
        let dispatcher = state.dispatcher();
        let finished = state.is_finished();
        let speed = props.speed;
        use_effect_with_deps(
            move |_| {
                let pending = (!finished).then(|| {
                    Timeout::new(speed, move || dispatcher.dispatch(TypewriterAction::Tick))
                });
                // dropping the Timeout cancels it
                move || drop(pending)
            },
            (state.shown(), props.text.clone(), speed),
        );
    }

    html! {
        <span class="typewriter">
            {state.visible().to_string()}
            <span class="cursor">{"|"}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(state: TypewriterState) -> TypewriterState {
        state.apply(TypewriterAction::Tick).unwrap_or(state)
    }

    #[test]
    fn reveals_one_character_per_tick() {
        let at_zero = TypewriterState::new("AB");
        assert_eq!(at_zero.visible(), "");
        let at_d = tick(at_zero);
        assert_eq!(at_d.visible(), "A");
        let at_2d = tick(at_d);
        assert_eq!(at_2d.visible(), "AB");
        assert!(at_2d.is_finished());
        assert_eq!(at_2d.apply(TypewriterAction::Tick), None);
    }

    #[test]
    fn restart_only_on_new_text() {
        let state = tick(tick(TypewriterState::new("Western")));
        assert_eq!(state.apply(TypewriterAction::Restart("Western".into())), None);
        let restarted = state
            .apply(TypewriterAction::Restart("Vintage".into()))
            .expect("restart");
        assert_eq!(restarted.shown(), 0);
        assert_eq!(restarted.visible(), "");
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        let mut state = TypewriterState::new("Gé✓");
        state = tick(state);
        state = tick(state);
        assert_eq!(state.visible(), "Gé");
        state = tick(state);
        assert_eq!(state.visible(), "Gé✓");
    }

    #[test]
    fn empty_text_is_finished_immediately() {
        let state = TypewriterState::new("");
        assert!(state.is_finished());
        assert_eq!(state.visible(), "");
    }
}
