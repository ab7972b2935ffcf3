use async_trait::async_trait;

use crate::{account::AccountInfo, context::RequestContext, errors::AppError};

pub mod memory;

/// Persistence seam between the service and a backend. Any implementation
/// honouring these three calls is interchangeable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Assigns the id and stores `info`. The caller guarantees `info.id == 0`.
    async fn create_account_info(
        &self,
        ctx: &RequestContext,
        info: AccountInfo,
    ) -> Result<AccountInfo, AppError>;

    async fn get_all_account_infos(
        &self,
        ctx: &RequestContext,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AccountInfo>, AppError>;

    async fn get_account_info_by_id(
        &self,
        ctx: &RequestContext,
        id: u64,
    ) -> Result<AccountInfo, AppError>;
}
