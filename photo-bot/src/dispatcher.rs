//! Transform dispatcher: runs one action and hands the result to the gateway.
//!
//! Image actions fetch the session photo through [`CoreBot::fetch_file`], decode it and run
//! exactly one transform on tokio's blocking pool. Utility actions pick from fixed lists.

use std::sync::Arc;

use dbot_core::{Bot as CoreBot, Chat};
use image_transform::{
    decode, encode_jpeg, encode_png, heatmap, invert, mirror, pixelate, render_ascii,
    sticker_fit, Palette,
};
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

use crate::action::{Action, ImageAction, UtilityAction};
use crate::config::WorkflowConfig;
use crate::error::WorkflowError;
use crate::session::Session;

pub const STICKER_FILENAME: &str = "sticker.png";

pub const JOKES: [&str; 8] = [
    "Why did the photo go to jail? It was framed.",
    "I told my camera a joke. It didn't get the picture.",
    "Why are pixels never lonely? They always come in groups.",
    "My selfie asked for a raise. I said it was already over-exposed.",
    "Why did the JPEG refuse to argue? It didn't want to lose quality.",
    "What do you call a bear with no teeth? A gummy bear.",
    "I'm reading a book about anti-gravity. It's impossible to put down.",
    "Why don't skeletons fight each other? They don't have the guts.",
];

pub const COMPLIMENTS: [&str; 8] = [
    "You have a great eye for pictures!",
    "Your taste in photos is impeccable.",
    "You make every frame look better.",
    "You're more colorful than a heat map.",
    "Talking to you is the highlight of my day.",
    "You bring out the best in every pixel.",
    "Your creativity is inspiring.",
    "You have excellent timing. Just like a good shutter.",
];

pub const COIN_SIDES: [&str; 2] = ["Heads", "Tails"];

/// Output of one action, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    /// Preformatted text (ASCII art).
    CodeBlock(String),
    /// JPEG bytes.
    Image(Vec<u8>),
    /// File attachment.
    Document { bytes: Vec<u8>, filename: String },
}

impl Payload {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::CodeBlock(_) => "code_block",
            Payload::Image(_) => "image",
            Payload::Document { .. } => "document",
        }
    }
}

fn pick(options: &[&str]) -> String {
    options
        .choose(&mut rand::thread_rng())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Runs an image action on raw photo bytes. CPU-bound; call off the async executor.
fn render(
    action: ImageAction,
    bytes: &[u8],
    palette: &Palette,
    config: &WorkflowConfig,
) -> Result<Payload, WorkflowError> {
    let img = decode(bytes)?;
    debug!(
        action = ?action,
        width = img.width(),
        height = img.height(),
        "Photo decoded"
    );

    let payload = match action {
        ImageAction::Pixelate => Payload::Image(encode_jpeg(
            &pixelate(&img, config.pixel_block_size),
            config.jpeg_quality,
        )?),
        ImageAction::Ascii => Payload::CodeBlock(render_ascii(&img, config.ascii_width, palette)),
        ImageAction::Invert => Payload::Image(encode_jpeg(&invert(&img), config.jpeg_quality)?),
        ImageAction::Mirror(direction) => {
            Payload::Image(encode_jpeg(&mirror(&img, direction), config.jpeg_quality)?)
        }
        ImageAction::Heatmap => Payload::Image(encode_jpeg(&heatmap(&img), config.jpeg_quality)?),
        ImageAction::Sticker => Payload::Document {
            bytes: encode_png(&sticker_fit(&img, config.sticker_size))?,
            filename: STICKER_FILENAME.to_string(),
        },
    };
    Ok(payload)
}

/// Maps actions to transforms and delivers payloads through the gateway.
#[derive(Clone)]
pub struct TransformDispatcher {
    bot: Arc<dyn CoreBot>,
    config: WorkflowConfig,
    default_palette: Palette,
}

impl TransformDispatcher {
    pub fn new(bot: Arc<dyn CoreBot>, config: WorkflowConfig) -> Self {
        let default_palette = Palette::new(&config.default_palette).unwrap_or_default();
        Self {
            bot,
            config,
            default_palette,
        }
    }

    /// Produces the payload for `action`. Image actions need a ready `session`, otherwise
    /// [`WorkflowError::SessionNotFound`] for `chat_id`.
    #[instrument(skip(self, session))]
    pub async fn dispatch(
        &self,
        chat_id: i64,
        action: Action,
        session: Option<&Session>,
    ) -> Result<Payload, WorkflowError> {
        let image_action = match action {
            Action::Utility(UtilityAction::Joke) => return Ok(Payload::Text(pick(&JOKES))),
            Action::Utility(UtilityAction::Compliment) => {
                return Ok(Payload::Text(pick(&COMPLIMENTS)))
            }
            Action::Utility(UtilityAction::FlipCoin) => {
                return Ok(Payload::Text(pick(&COIN_SIDES)))
            }
            Action::Image(image_action) => image_action,
        };

        let session = session.ok_or(WorkflowError::SessionNotFound(chat_id))?;
        let bytes = self
            .bot
            .fetch_file(&session.photo_ref)
            .await
            .map_err(|e| WorkflowError::DownloadFailed(e.to_string()))?;
        info!(chat_id, size = bytes.len(), "Photo fetched");

        let palette = session
            .palette
            .clone()
            .unwrap_or_else(|| self.default_palette.clone());
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || render(image_action, &bytes, &palette, &config))
            .await
            .map_err(|e| WorkflowError::TransformFailed(e.to_string()))?
    }

    /// Sends `payload` to `chat` with the matching gateway call.
    pub async fn deliver(&self, chat: &Chat, payload: Payload) -> dbot_core::Result<()> {
        debug!(chat_id = chat.id, payload = payload.kind_name(), "Delivering result");
        match payload {
            Payload::Text(text) => self.bot.send_message(chat, &text).await,
            Payload::CodeBlock(text) => self.bot.send_code_block(chat, &text).await,
            Payload::Image(jpeg) => self.bot.send_photo(chat, jpeg).await,
            Payload::Document { bytes, filename } => {
                self.bot.send_document(chat, bytes, &filename).await
            }
        }
    }
}
