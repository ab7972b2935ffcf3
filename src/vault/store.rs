use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    account::AccountInfo,
    config::VaultSettings,
    context::RequestContext,
    errors::AppError,
    helpers::id::IdGenerator,
    storage::AccountStore,
};

use super::types::{CreateResponse, Revision, SearchRequest, SearchResponse, VaultDocument};

pub struct VaultStore {
    client: Client,
    url: String,
    search_url: String,
    timeout: Duration,
    ids: IdGenerator,
}

impl VaultStore {
    pub fn new(settings: &VaultSettings) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let api_key = HeaderValue::from_str(&settings.api_key)
            .map_err(|err| AppError::Config(format!("invalid vault api key: {}", err)))?;
        headers.insert("x-api-key", api_key);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| AppError::Internal(err.to_string()))?;

        Ok(VaultStore {
            client,
            url: settings.url.clone(),
            search_url: settings.search_url.clone(),
            timeout: Duration::from_secs(settings.timeout_sec),
            ids: IdGenerator::new(),
        })
    }

    async fn call<B, R>(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<R, AppError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(|err| {
            tracing::error!("failed to serialize vault request: {}", err);
            AppError::Internal("failed to serialize vault request".to_string())
        })?;

        let response = self
            .client
            .request(method, url)
            .timeout(ctx.timeout(self.timeout))
            .body(body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("vault request to {} failed: {}", url, err);
                AppError::from(err)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            tracing::error!("failed to read vault response body: {}", err);
            AppError::from(err)
        })?;

        if status != StatusCode::OK {
            tracing::error!(
                "vault responded with {}: {}",
                status,
                String::from_utf8_lossy(&body)
            );
            return Err(AppError::VaultStatus(status.as_u16()));
        }

        serde_json::from_slice(&body).map_err(|err| {
            tracing::error!("failed to decode vault response: {}", err);
            AppError::from(err)
        })
    }

    async fn search(
        &self,
        ctx: &RequestContext,
        request: &SearchRequest,
    ) -> Result<Vec<Revision>, AppError> {
        let response: SearchResponse = self
            .call(ctx, Method::POST, &self.search_url, request)
            .await?;
        tracing::debug!(
            "vault search {:?} returned page {} ({} per page)",
            response.search_id,
            response.page,
            response.per_page
        );
        Ok(response.revisions.unwrap_or_default())
    }
}

fn decode_document(revision: Revision) -> Result<AccountInfo, AppError> {
    let document: VaultDocument = serde_json::from_value(revision.document)?;
    Ok(document.into())
}

fn parse_transaction_id(response: &CreateResponse) -> Result<u64, AppError> {
    let raw = response.transaction_id.clone().unwrap_or_default();
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidTransactionId(raw));
    }
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidTransactionId(raw)),
    }
}

#[async_trait]
impl AccountStore for VaultStore {
    async fn create_account_info(
        &self,
        ctx: &RequestContext,
        mut info: AccountInfo,
    ) -> Result<AccountInfo, AppError> {
        ctx.check()?;

        info.id = self.ids.next_id();
        let response: CreateResponse = self
            .call(ctx, Method::PUT, &self.url, &VaultDocument::from(&info))
            .await?;

        let transaction_id = parse_transaction_id(&response)?;
        tracing::info!(
            "stored account info {} as document {} in transaction {}",
            info.id,
            response.document_id,
            transaction_id
        );
        Ok(info)
    }

    async fn get_all_account_infos(
        &self,
        ctx: &RequestContext,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AccountInfo>, AppError> {
        ctx.check()?;

        let revisions = self
            .search(ctx, &SearchRequest::page(page, page_size))
            .await?;

        Ok(revisions
            .into_iter()
            .filter_map(|revision| match decode_document(revision) {
                Ok(info) => Some(info),
                Err(err) => {
                    tracing::warn!("skipping undecodable vault document: {}", err);
                    None
                }
            })
            .collect())
    }

    async fn get_account_info_by_id(
        &self,
        ctx: &RequestContext,
        id: u64,
    ) -> Result<AccountInfo, AppError> {
        ctx.check()?;

        let revision = self
            .search(ctx, &SearchRequest::by_id(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("account info not found".to_string()))?;

        decode_document(revision)
    }
}
