use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpServer, middleware};
use std::env;
use std::path::PathBuf;

struct FeedDir {
    path: PathBuf,
}

async fn points(feeds: web::Data<FeedDir>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(feeds.path.join("points.json")).await?)
}

async fn routes(feeds: web::Data<FeedDir>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(feeds.path.join("routes.json")).await?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Get port from environment or default to 8080
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    // Directory holding the two feed documents (points.json, routes.json)
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "../data".to_string());

    println!("Starting server on 0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(FeedDir {
                path: PathBuf::from(data_dir.clone()),
            }))
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .route("/points", web::get().to(points))
            .route("/routes", web::get().to(routes))
            .service(Files::new("/", "./dist").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
