use crate::models::view::{RouteMeta, ViewRoute};

pub const FLASH_CARDS_GAME_ID: &str = "second-declension-flash-cards";
pub const DEFINITE_ARTICLES_GAME_ID: &str = "definite-articles-1";

const VIEW_ROUTES: &[ViewRoute] = &[
    ViewRoute {
        path: "/",
        name: "Home",
        meta: None,
    },
    ViewRoute {
        path: "/definite-articles-1",
        name: "Definite Articles 1",
        meta: Some(RouteMeta {
            description: "Identify the gender, number and case of each form of the article",
            is_game: true,
        }),
    },
    ViewRoute {
        path: "/second-declension-flash-cards",
        name: "Second Declension Flash Cards",
        meta: Some(RouteMeta {
            description: "Parse the inflected forms of common second-declension nouns",
            is_game: true,
        }),
    },
    ViewRoute {
        path: "/second-declension-vocabulary",
        name: "Second Declension Vocabulary",
        meta: Some(RouteMeta {
            description: "Head forms and glosses for the second-declension word list",
            is_game: false,
        }),
    },
    ViewRoute {
        path: "/performance",
        name: "Performance",
        meta: Some(RouteMeta {
            description: "How often each question has been seen and answered correctly",
            is_game: false,
        }),
    },
];

pub fn view_routes() -> &'static [ViewRoute] {
    VIEW_ROUTES
}

pub fn find_view(path: &str) -> Option<&'static ViewRoute> {
    VIEW_ROUTES.iter().find(|route| route.path == path)
}

pub fn find_view_by_slug(slug: &str) -> Option<&'static ViewRoute> {
    VIEW_ROUTES.iter().find(|route| route.slug() == slug)
}

pub fn games() -> impl Iterator<Item = &'static ViewRoute> {
    VIEW_ROUTES.iter().filter(|route| route.is_game())
}
