//! Plain confirmation message.

use serde::Serialize;

/// `{ "mensagem": "..." }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensagem: String,
}

impl MessageResponse {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }
}
