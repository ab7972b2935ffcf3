use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{account::AccountInfo, context::RequestContext, errors::AppError};

use super::AccountStore;

/// Process-local store, ids are assigned sequentially starting at 1.
#[derive(Default)]
pub struct MemoryStore {
    accounts: RwLock<BTreeMap<u64, AccountInfo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create_account_info(
        &self,
        ctx: &RequestContext,
        mut info: AccountInfo,
    ) -> Result<AccountInfo, AppError> {
        ctx.check()?;

        let mut accounts = self.accounts.write().await;
        info.id = accounts.len() as u64 + 1;
        accounts.insert(info.id, info.clone());
        tracing::debug!("stored account info {} in memory", info.id);
        Ok(info)
    }

    async fn get_all_account_infos(
        &self,
        ctx: &RequestContext,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AccountInfo>, AppError> {
        ctx.check()?;

        let skip = (page.max(1) as usize - 1).saturating_mul(page_size as usize);
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn get_account_info_by_id(
        &self,
        ctx: &RequestContext,
        id: u64,
    ) -> Result<AccountInfo, AppError> {
        ctx.check()?;

        self.accounts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("account id {} not found", id)))
    }
}
