use actix_http::StatusCode;
use actix_web::{
    web::{self, delete, get, post, put, Data, Json, JsonConfig, Path, Query},
    HttpResponse,
};

use crate::{
    errors::{ApiError, AppError},
    service::AccountService,
    types::{AccountInfoDto, GreetingResponse, PageRequest, Response},
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = JsonConfig::default().error_handler(|err, _| {
        ApiError::new(
            AppError::BadRequest(err.to_string()),
            StatusCode::BAD_REQUEST,
            "error binding to json",
        )
        .into()
    });

    cfg.app_data(json_config)
        .route("/", get().to(health))
        .service(
            web::scope("/v1/api")
                .route("/account-info", get().to(get_account_infos))
                .route("/account-info", post().to(create_account_info))
                .route("/account-info/{id}", get().to(get_account_info))
                .route("/account-info/{id}", put().to(update_account_info))
                .route("/account-info/{id}", delete().to(delete_account_info)),
        );
}

// answers without contacting the vault
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(GreetingResponse {
        message: "hello world".to_string(),
    })
}

pub async fn get_account_infos(
    request: Query<PageRequest>,
    service: Data<AccountService>,
) -> Result<HttpResponse, ApiError> {
    let ctx = service.request_context();
    let infos = service
        .get_all_account_infos(&ctx, request.page(), request.page_size())
        .await
        .map_err(ApiError::internal("failed to load accountInfos"))?;

    let output = infos
        .into_iter()
        .map(AccountInfoDto::from)
        .collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(Response::ok(output)))
}

pub async fn get_account_info(
    id: Path<String>,
    service: Data<AccountService>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let ctx = service.request_context();
    let info = service
        .get_account_info_by_id(&ctx, id)
        .await
        .map_err(ApiError::internal("failed to load accountInfo"))?;

    Ok(HttpResponse::Ok().json(Response::ok(AccountInfoDto::from(info))))
}

pub async fn create_account_info(
    request: Json<Option<AccountInfoDto>>,
    service: Data<AccountService>,
) -> Result<HttpResponse, ApiError> {
    let ctx = service.request_context();
    let info = service
        .create_account_info(&ctx, request.into_inner().map(Into::into))
        .await
        .map_err(ApiError::internal("failed to create accountInfo"))?;

    Ok(HttpResponse::Created().json(Response::ok(AccountInfoDto::from(info))))
}

pub async fn update_account_info() -> Result<HttpResponse, ApiError> {
    Err(not_allowed("update is not allowed"))
}

pub async fn delete_account_info() -> Result<HttpResponse, ApiError> {
    Err(not_allowed("delete is not allowed"))
}

fn not_allowed(message: &str) -> ApiError {
    ApiError::new(
        AppError::MethodNotAllowed(message.to_string()),
        StatusCode::METHOD_NOT_ALLOWED,
        message,
    )
}

fn parse_id(id: &str) -> Result<u64, ApiError> {
    id.parse::<u64>().map_err(|err| {
        tracing::debug!("failed to parse account id '{}': {}", id, err);
        ApiError::new(
            AppError::IncorrectAccountId,
            StatusCode::BAD_REQUEST,
            "id is required",
        )
    })
}
