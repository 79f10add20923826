use anyhow::{anyhow, Result};
use log::debug;
use oddsbook_engine::types::Matchup;
use oddsbook_server::{
    data_objects::{JsonResponse, MatchupListResult, NewMatchupParams, WagerQuoteResult},
    routes::ADMIN_KEY_HEADER,
};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Response,
};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

pub struct OddsbookClient {
    client: Client,
    server: Url,
    admin_key: Option<String>,
}

impl OddsbookClient {
    pub fn new(server: Url, admin_key: Option<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent("Oddsbook Tools")
            .default_headers(headers)
            .build()
            .expect("Failed to create reqwest client");
        Self { client, server, admin_key }
    }

    pub fn server(&self) -> &str {
        self.server.as_str()
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.server.join(path).map_err(|e| anyhow!("Failed to join URL: {e}"))
    }

    fn admin_key(&self) -> Result<&str> {
        self.admin_key
            .as_deref()
            .ok_or_else(|| anyhow!("This command needs the admin credential. Set OBK_ADMIN_KEY."))
    }

    pub async fn health(&self) -> Result<String> {
        let res = self.client.get(self.url("/health")?).send().await?;
        Ok(res.text().await?)
    }

    pub async fn list_matchups(&self) -> Result<MatchupListResult> {
        debug!("Fetching the matchup catalog from {}", self.server());
        let res = self.client.get(self.url("/api/matchups")?).send().await?;
        expect_json(res).await
    }

    pub async fn matchup(&self, id: &str) -> Result<Matchup> {
        let res = self.client.get(self.url(&format!("/api/matchups/{id}"))?).send().await?;
        expect_json(res).await
    }

    pub async fn create_matchup(&self, params: &NewMatchupParams) -> Result<Matchup> {
        let res = self
            .client
            .post(self.url("/api/matchups")?)
            .header(ADMIN_KEY_HEADER, self.admin_key()?)
            .json(params)
            .send()
            .await?;
        expect_json(res).await
    }

    pub async fn delete_matchup(&self, id: &str) -> Result<Matchup> {
        let res = self
            .client
            .delete(self.url(&format!("/api/matchups/{id}"))?)
            .header(ADMIN_KEY_HEADER, self.admin_key()?)
            .send()
            .await?;
        expect_json(res).await
    }

    pub async fn quote_wager(&self, id: &str, side: &str, stake: Decimal) -> Result<WagerQuoteResult> {
        let res = self
            .client
            .post(self.url(&format!("/api/matchups/{id}/quote"))?)
            .json(&json!({ "side": side, "stake": stake }))
            .send()
            .await?;
        expect_json(res).await
    }

    pub async fn verify_credential(&self) -> Result<JsonResponse> {
        let res = self
            .client
            .post(self.url("/api/auth/verify")?)
            .header(ADMIN_KEY_HEADER, self.admin_key()?)
            .send()
            .await?;
        expect_json(res).await
    }
}

async fn expect_json<T: DeserializeOwned>(res: Response) -> Result<T> {
    let status = res.status();
    if status.is_success() {
        Ok(res.json().await?)
    } else {
        let body = res.text().await.unwrap_or_default();
        Err(anyhow!("Server returned {status}: {body}"))
    }
}
