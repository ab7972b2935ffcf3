use std::{sync::Arc, time::Duration};

use actix_web::web::Data;

use crate::{
    account::AccountInfo,
    config::{Config, StorageBackend},
    context::RequestContext,
    errors::{AppError, ValidationError},
    storage::{memory::MemoryStore, AccountStore},
    vault::VaultStore,
};

pub struct AccountService {
    pub(crate) config: Data<Config>,
    pub(crate) store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(config: Data<Config>, store: Arc<dyn AccountStore>) -> Data<Self> {
        Data::new(AccountService { config, store })
    }

    /// Builds the store selected by `config.storage`.
    pub fn from_config(config: Data<Config>) -> Result<Data<Self>, AppError> {
        let store: Arc<dyn AccountStore> = match config.storage {
            StorageBackend::Vault => Arc::new(VaultStore::new(&config.vault)?),
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
        };
        tracing::info!("using {:?} account storage", config.storage);
        Ok(Self::new(config, store))
    }

    pub fn request_context(&self) -> RequestContext {
        RequestContext::with_timeout(Duration::from_secs(self.config.request_timeout_sec))
    }

    pub async fn create_account_info(
        &self,
        ctx: &RequestContext,
        info: Option<AccountInfo>,
    ) -> Result<AccountInfo, AppError> {
        ctx.check()?;
        let info = validate_account(info)?;
        self.store.create_account_info(ctx, info).await
    }

    pub async fn get_all_account_infos(
        &self,
        ctx: &RequestContext,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AccountInfo>, AppError> {
        ctx.check()?;
        self.store.get_all_account_infos(ctx, page, page_size).await
    }

    pub async fn get_account_info_by_id(
        &self,
        ctx: &RequestContext,
        id: u64,
    ) -> Result<AccountInfo, AppError> {
        ctx.check()?;
        self.store.get_account_info_by_id(ctx, id).await
    }
}

fn validate_account(info: Option<AccountInfo>) -> Result<AccountInfo, ValidationError> {
    let info = info.ok_or(ValidationError::InvalidInput)?;

    if info.id != 0 {
        return Err(ValidationError::IdentifierSpecified);
    }
    // iban is expected to be unique, nothing checks that yet
    if info.iban.is_empty() {
        return Err(ValidationError::MissingIban);
    }
    if info.name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if info.account_type.is_none() {
        return Err(ValidationError::MissingType);
    }
    Ok(info)
}
