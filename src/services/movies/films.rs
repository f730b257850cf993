use {
    super::LISTING_PATH,
    crate::{
        catalog::Catalog,
        views::{self, MoviePage, MoviesPage},
    },
    actix_web::{get, http::header, web, HttpResponse},
};

pub const LISTING_UNAVAILABLE: &str = "Could not fetch movie list.";

fn to_listing() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, LISTING_PATH))
        .finish()
}

#[get("/movies")]
pub async fn list_films(catalog: web::Data<Catalog>) -> actix_web::Result<HttpResponse> {
    match catalog.films().await {
        Ok(listing) => views::render(&MoviesPage { listing: &listing }),
        Err(err) => {
            tracing::warn!(error = %err, "Film listing unavailable");

            Ok(HttpResponse::NotFound()
                .content_type(header::ContentType::plaintext())
                .body(LISTING_UNAVAILABLE))
        }
    }
}

/// Unparseable ids and upstream failures are answered with a redirect to the
/// listing, never an error page.
#[get("/movie/{id}")]
pub async fn get_film(
    catalog: web::Data<Catalog>,
    id: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let id = match id.parse::<u32>() {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(id = %id.as_str(), error = %err, "Invalid film id, redirecting to listing");

            return Ok(to_listing());
        }
    };

    match catalog.film(id).await {
        Ok(film) => views::render(&MoviePage { film: &film }),
        Err(err) => {
            tracing::warn!(id, error = %err, "Film unavailable, redirecting to listing");

            Ok(to_listing())
        }
    }
}

#[get("/movie")]
pub async fn redirect_to_listing() -> HttpResponse {
    to_listing()
}
