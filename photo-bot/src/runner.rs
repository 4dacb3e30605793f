use anyhow::Result;
use dbot_core::init_tracing;
use dbot_telegram::run_dispatcher;
use tracing::{info, instrument};

use super::components::{build_bot_components, build_handler_chain};
use super::config::BotConfig;

/// Main entry: validate config, init logging, build components and chain, then poll until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    let components = build_bot_components(&config);
    let handler_chain = build_handler_chain(
        components.bot_adapter.clone(),
        components.conversation.clone(),
        config.workflow(),
    );

    info!(
        ascii_width = config.workflow().ascii_width,
        pixel_block_size = config.workflow().pixel_block_size,
        sticker_size = config.workflow().sticker_size,
        session_ttl_secs = config.workflow().session_ttl_secs,
        handlers = handler_chain.len(),
        "Photo bot starting"
    );

    run_dispatcher(components.teloxide_bot, handler_chain).await?;

    info!("Photo bot stopped");
    Ok(())
}
