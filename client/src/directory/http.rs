use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::{
    config::LobbyConfig,
    error::{LobbyError, Result},
    room::Room,
};

use super::RoomDirectory;

#[derive(Serialize)]
struct CreateRoomBody<'a> {
    name: &'a str,
}

/// Cliente HTTP do diretório de salas.
#[derive(Clone, Debug)]
pub struct HttpRoomDirectory {
    client: reqwest::Client,
    rooms_url: String,
}

impl HttpRoomDirectory {
    pub fn new(config: &LobbyConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            rooms_url: config.rooms_url(),
        })
    }

    pub fn rooms_url(&self) -> &str {
        &self.rooms_url
    }
}

#[async_trait]
impl RoomDirectory for HttpRoomDirectory {
    async fn fetch_rooms(&self) -> Result<Vec<Room>> {
        debug!(url = %self.rooms_url, "GET rooms");
        let response = self.client.get(&self.rooms_url).send().await?;
        let rooms = ensure_success(response).await?.json::<Vec<Room>>().await?;
        debug!(count = rooms.len(), "rooms received");
        Ok(rooms)
    }

    async fn create_room(&self, name: &str) -> Result<Room> {
        debug!(url = %self.rooms_url, name, "POST room");
        let response = self
            .client
            .post(&self.rooms_url)
            .json(&CreateRoomBody { name })
            .send()
            .await?;
        let room = ensure_success(response).await?.json::<Room>().await?;
        Ok(room)
    }
}

/// Converte respostas fora de 2xx em `LobbyError::Status` com o corpo.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(LobbyError::Status {
        status: status.as_u16(),
        body: body.trim().to_string(),
    })
}

#[cfg(test)]
#[path = "../tests/directory_tests.rs"]
mod tests;
