use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub description: &'static str,
    pub is_game: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewRoute {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: Option<RouteMeta>,
}

impl ViewRoute {
    pub fn is_game(&self) -> bool {
        self.meta.map(|meta| meta.is_game).unwrap_or(false)
    }

    /// Games are identified by their path without the leading slash.
    pub fn game_id(&self) -> Option<&'static str> {
        if self.is_game() {
            Some(self.path.trim_start_matches('/'))
        } else {
            None
        }
    }

    /// Single path segment used to address the view over the API; `/` is `home`.
    pub fn slug(&self) -> &'static str {
        match self.path.trim_start_matches('/') {
            "" => "home",
            slug => slug,
        }
    }
}
