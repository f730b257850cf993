pub mod films;

use actix_web::dev::HttpServiceFactory;

pub const LISTING_PATH: &str = "/movies";

pub fn service() -> impl HttpServiceFactory + 'static {
    (
        films::list_films,
        films::get_film,
        films::redirect_to_listing,
    )
}
