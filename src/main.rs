use account_vault::{config::Config, routes, service::AccountService, telemetry};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::get().expect("failed to parse config");
    telemetry::setup(&config.telemetry);

    let config = Data::new(config);
    let service = AccountService::from_config(config.clone())
        .expect("failed to init account service");

    let host = config.host.clone();
    let port = config.port;
    tracing::info!(
        "starting webserver at http://{}:{}",
        &host,
        &port
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::new("%r %s %b %T"))
            .app_data(service.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
