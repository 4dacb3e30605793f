//! Menu actions and their callback tokens.

use dbot_core::MenuButton;
use image_transform::Direction;

use crate::error::WorkflowError;

/// Actions that transform the session photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAction {
    Pixelate,
    Ascii,
    Invert,
    Mirror(Direction),
    Heatmap,
    Sticker,
}

/// Actions that need no photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilityAction {
    Joke,
    Compliment,
    FlipCoin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Image(ImageAction),
    Utility(UtilityAction),
}

const MIRROR_PREFIX: &str = "mirror_";

impl Action {
    /// Parses a callback token. Unknown tokens yield `Ok(None)`; a `mirror_<dir>` token with an
    /// unknown direction fails with [`WorkflowError::UnsupportedDirection`].
    pub fn parse(token: &str) -> Result<Option<Self>, WorkflowError> {
        let action = match token {
            "pixelate" => Action::Image(ImageAction::Pixelate),
            "ascii" => Action::Image(ImageAction::Ascii),
            "invert" => Action::Image(ImageAction::Invert),
            "heatmap" => Action::Image(ImageAction::Heatmap),
            "sticker" => Action::Image(ImageAction::Sticker),
            "joke" => Action::Utility(UtilityAction::Joke),
            "compliment" => Action::Utility(UtilityAction::Compliment),
            "flip_coin" => Action::Utility(UtilityAction::FlipCoin),
            other => match other.strip_prefix(MIRROR_PREFIX) {
                Some(direction) => Action::Image(ImageAction::Mirror(direction.parse()?)),
                None => return Ok(None),
            },
        };
        Ok(Some(action))
    }

    /// Callback token; the inverse of [`Action::parse`].
    pub fn token(&self) -> String {
        match self {
            Action::Image(ImageAction::Pixelate) => "pixelate".to_string(),
            Action::Image(ImageAction::Ascii) => "ascii".to_string(),
            Action::Image(ImageAction::Invert) => "invert".to_string(),
            Action::Image(ImageAction::Mirror(direction)) => {
                format!("{}{}", MIRROR_PREFIX, direction)
            }
            Action::Image(ImageAction::Heatmap) => "heatmap".to_string(),
            Action::Image(ImageAction::Sticker) => "sticker".to_string(),
            Action::Utility(UtilityAction::Joke) => "joke".to_string(),
            Action::Utility(UtilityAction::Compliment) => "compliment".to_string(),
            Action::Utility(UtilityAction::FlipCoin) => "flip_coin".to_string(),
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Image(ImageAction::Pixelate) => "Pixelate",
            Action::Image(ImageAction::Ascii) => "ASCII Art",
            Action::Image(ImageAction::Invert) => "Invert Colors",
            Action::Image(ImageAction::Mirror(Direction::Horizontal)) => "Mirror Horizontally",
            Action::Image(ImageAction::Mirror(Direction::Vertical)) => "Mirror Vertically",
            Action::Image(ImageAction::Heatmap) => "Heat Map",
            Action::Image(ImageAction::Sticker) => "Sticker",
            Action::Utility(UtilityAction::Joke) => "Random Joke",
            Action::Utility(UtilityAction::Compliment) => "Compliment",
            Action::Utility(UtilityAction::FlipCoin) => "Flip a Coin",
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Action::Image(_))
    }

    fn button(self) -> MenuButton {
        MenuButton::new(self.label(), self.token())
    }
}

/// Inline menu shown once the palette is set.
pub fn action_menu() -> Vec<Vec<MenuButton>> {
    use Action::{Image, Utility};

    vec![
        vec![
            Image(ImageAction::Pixelate).button(),
            Image(ImageAction::Ascii).button(),
            Image(ImageAction::Invert).button(),
        ],
        vec![
            Image(ImageAction::Mirror(Direction::Horizontal)).button(),
            Image(ImageAction::Mirror(Direction::Vertical)).button(),
        ],
        vec![
            Image(ImageAction::Heatmap).button(),
            Image(ImageAction::Sticker).button(),
        ],
        vec![
            Utility(UtilityAction::Joke).button(),
            Utility(UtilityAction::Compliment).button(),
            Utility(UtilityAction::FlipCoin).button(),
        ],
    ]
}
