use anyhow::anyhow;
use async_trait::async_trait;
use log::{debug, info};
use std::path::Path;
use teloxide::requests::Requester;
use teloxide::types::{ChatId, InputFile};
use teloxide::RequestError;
use thiserror::Error;

use teloxide::Bot;

#[derive(Error, Debug)]
pub enum DocumentSendError {
    #[error("DocumentSendError.RetryAfter: {0:?}")]
    RetryAfter(std::time::Duration),
    #[error("DocumentSendError.BotBlocked")]
    BotBlocked,
    #[error("DocumentSendError.TeloxideError: {0}")]
    TeloxideError(teloxide::RequestError),
    #[error("DocumentSendError.UnknownError: {0}")]
    UnknownError(anyhow::Error),
}

fn map_send_error<T>(send_result: Result<T, RequestError>) -> Result<T, DocumentSendError> {
    match send_result {
        Ok(value) => Ok(value),
        Err(e) => match e {
            teloxide::RequestError::RetryAfter(duration) => {
                Err(DocumentSendError::RetryAfter(duration))
            }
            teloxide::RequestError::Api(api_error) => match api_error {
                teloxide::ApiError::BotBlocked => Err(DocumentSendError::BotBlocked),
                _ => Err(DocumentSendError::TeloxideError(
                    teloxide::RequestError::Api(api_error.clone()),
                )),
            },
            _ => Err(DocumentSendError::TeloxideError(e)),
        },
    }
}

/// One document upload to one chat. The upload loop only talks to this
/// trait, so cycles can be exercised without a network.
#[async_trait]
pub trait DocumentSender {
    async fn send_document(&self, chat_id: i64, path: &Path) -> Result<(), DocumentSendError>;
}

/// Production sender backed by the Telegram Bot API.
pub struct BotSender {
    bot: Bot,
}

impl BotSender {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl DocumentSender for BotSender {
    async fn send_document(&self, chat_id: i64, path: &Path) -> Result<(), DocumentSendError> {
        if !path.is_file() {
            return Err(DocumentSendError::UnknownError(anyhow!(
                "Not a regular file: {:?}",
                path
            )));
        }

        // InputFile::file streams the bytes and preserves the filename in
        // the multipart "document" field.
        let document = InputFile::file(path.to_path_buf());

        let message = map_send_error(self.bot.send_document(ChatId(chat_id), document).await)?;

        info!("Sent {}: message_id={}", path.display(), message.id.0);
        debug!("sendDocument response: {:?}", message);

        Ok(())
    }
}
