//! Dispatcher runner: converts teloxide messages and callback queries to core::Message and queues them
//! for a single worker that runs the HandlerChain one event at a time.

use anyhow::Result;
use dbot_core::{Message as CoreMessage, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

type EventSender = mpsc::UnboundedSender<CoreMessage>;
type HandlerResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Spawns the worker that drains the event queue sequentially: each message is fully handled
/// before the next one is taken. The worker ends when every sender is dropped.
pub fn spawn_worker(handler_chain: HandlerChain) -> (EventSender, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<CoreMessage>();
    let handle = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                message_id = %message.id,
                kind = message.kind_name(),
                "step: processing message (handler chain started)"
            );
            if let Err(e) = handler_chain.handle(&message).await {
                error!(error = %e, chat_id = message.chat.id, "Handler chain failed");
            }
        }
        info!("Event worker stopped");
    });
    (tx, handle)
}

fn enqueue(tx: &EventSender, message: CoreMessage) {
    if let Err(e) = tx.send(message) {
        error!(chat_id = e.0.chat.id, "Event worker is gone, dropping message");
    }
}

async fn on_message(msg: teloxide::types::Message, tx: EventSender) -> HandlerResult {
    match TelegramMessageWrapper(&msg).to_core() {
        Some(core_msg) => {
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                kind = core_msg.kind_name(),
                "Received message"
            );
            enqueue(&tx, core_msg);
        }
        None => debug!(chat_id = msg.chat.id.0, "Ignoring unsupported message"),
    }
    Ok(())
}

async fn on_callback(bot: teloxide::Bot, q: CallbackQuery, tx: EventSender) -> HandlerResult {
    if let Some(core_msg) = TelegramCallbackWrapper(&q).to_core() {
        info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            data = %core_msg.content,
            "Received callback"
        );
        enqueue(&tx, core_msg);
    }

    // Dismiss the client's loading indicator
    let _ = bot.answer_callback_query(q.id).await;
    Ok(())
}

/// Starts long polling with the given teloxide Bot. Messages and callback queries are converted and
/// queued for one sequential worker running `handler_chain`. Returns after Ctrl-C once the queue is drained.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let (tx, worker) = spawn_worker(handler_chain);

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("Dispatcher starting");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![tx])
        .default_handler(|_upd| async {})
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    worker.await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dbot_core::{Chat, Handler, HandlerResponse, MessageKind, User};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn message(id: &str) -> CoreMessage {
        CoreMessage {
            id: id.to_string(),
            user: User {
                id: 1,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 10,
                chat_type: "private".to_string(),
            },
            content: String::new(),
            kind: MessageKind::Text,
            created_at: chrono::Utc::now(),
        }
    }

    /// Records start/end of each message; sleeps in between to expose any overlap.
    struct SlowRecorder {
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Handler for SlowRecorder {
        async fn handle(&self, message: &CoreMessage) -> dbot_core::Result<HandlerResponse> {
            self.log.lock().unwrap().push(format!("start {}", message.id));
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.log.lock().unwrap().push(format!("end {}", message.id));
            Ok(HandlerResponse::Stop)
        }
    }

    /// **Test: the worker handles queued messages one at a time, in order, and stops when the sender is dropped.**
    #[tokio::test]
    async fn test_worker_is_sequential() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = HandlerChain::new().add_handler(Arc::new(SlowRecorder { log: log.clone() }));

        let (tx, worker) = spawn_worker(chain);
        for id in ["1", "2", "3"] {
            enqueue(&tx, message(id));
        }
        drop(tx);
        worker.await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["start 1", "end 1", "start 2", "end 2", "start 3", "end 3"]
        );
    }
}
