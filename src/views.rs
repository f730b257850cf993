use {
    crate::catalog::{Film, FilmListing},
    actix_web::{error, http::header::ContentType, HttpResponse},
    askama::Template,
};

#[derive(Template)]
#[template(path = "movies.html")]
pub struct MoviesPage<'a> {
    pub listing: &'a FilmListing,
}

#[derive(Template)]
#[template(path = "movie.html")]
pub struct MoviePage<'a> {
    pub film: &'a Film,
}

pub fn render<T: Template>(page: &T) -> actix_web::Result<HttpResponse> {
    let body = page.render().map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
