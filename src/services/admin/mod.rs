use {
    actix_web::{dev::HttpServiceFactory, get, web, Responder},
    serde::Serialize,
};

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

#[get("/health")]
async fn health() -> impl Responder {
    web::Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn service() -> impl HttpServiceFactory + 'static {
    web::scope("/admin").service(health)
}
