use askama::Template;

use super::state::Facets;
use crate::pkg::internal::adaptors::jobs::spec::JobRecord;

#[derive(Template)]
#[template(path = "listings.html")]
pub struct ListingsPage<'a> {
    pub service_name: &'a str,
    pub jobs: Vec<&'a JobRecord>,
}

#[derive(Template)]
#[template(path = "listings.txt")]
pub struct ListingsText<'a> {
    pub jobs: Vec<&'a JobRecord>,
}

#[derive(Template)]
#[template(path = "facets.txt")]
pub struct FacetsText<'a> {
    pub no_constraint: &'a str,
    pub facets: &'a Facets,
}

#[derive(Template)]
#[template(path = "facets.html")]
pub struct FacetsPage<'a> {
    pub no_constraint: &'a str,
    pub facets: &'a Facets,
}
