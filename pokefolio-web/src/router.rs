use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Battle,
    #[at("/404")]
    #[not_found]
    NotFound,
    /// A battle option, addressed by its id.
    #[at("/:destination")]
    View { destination: String },
}

impl Route {
    #[must_use]
    pub fn for_option(id: &str) -> Self {
        Self::View {
            destination: id.to_string(),
        }
    }
}
