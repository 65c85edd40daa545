use {
    anyhow::{Result, bail},
    std::str::FromStr,
    strum_macros::{Display, EnumIter},
};

use crate::config::DF;

/// The three pages. Every path outside this table falls back to `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Route {
    #[default]
    Home,
    #[strum(to_string = "Documentation")]
    Docs,
    Terminal,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Docs => "/docs",
            Route::Terminal => "/terminal",
        }
    }

    /// Lenient lookup: anything that does not parse lands on Home.
    pub fn resolve(path: &str) -> Route {
        match path.parse() {
            Ok(route) => route,
            Err(e) => {
                if DF.log_routing {
                    log::warn!("{:#}, showing {}", e, Route::Home.path());
                }
                Route::Home
            }
        }
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    /// Accepts "/docs", "docs", "#/docs" and "/docs/" alike.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');
        Ok(match normalized {
            "" => Route::Home,
            "docs" => Route::Docs,
            "terminal" => Route::Terminal,
            _ => bail!("unknown route '{}'", s),
        })
    }
}

/// Browser location hash as the route source, so deep links and the back
/// button work in the web build.
#[cfg(target_arch = "wasm32")]
pub(crate) mod location {
    use super::Route;

    pub(crate) fn current() -> Option<Route> {
        let hash = web_sys::window()?.location().hash().ok()?;
        Some(Route::resolve(&hash))
    }

    pub(crate) fn set(route: Route) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let target = format!("#{}", route.path());
        let location = window.location();
        if location.hash().ok().as_deref() != Some(target.as_str()) {
            if let Err(e) = location.set_hash(&target) {
                log::warn!("could not update location hash: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, strum::IntoEnumIterator};

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::iter() {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn path_spellings_are_normalized() {
        assert_eq!("".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("#/".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("docs".parse::<Route>().unwrap(), Route::Docs);
        assert_eq!("/docs/".parse::<Route>().unwrap(), Route::Docs);
        assert_eq!("#/terminal".parse::<Route>().unwrap(), Route::Terminal);
        assert_eq!("  /terminal  ".parse::<Route>().unwrap(), Route::Terminal);
    }

    #[test]
    fn unknown_paths_fail_to_parse_but_resolve_home() {
        let err = "/features".parse::<Route>().unwrap_err();
        assert!(err.to_string().contains("/features"));
        assert_eq!(Route::resolve("/features"), Route::Home);
        assert_eq!(Route::resolve("/docs/intro"), Route::Home);
    }

    #[test]
    fn display_names_pages() {
        assert_eq!(Route::Docs.to_string(), "Documentation");
        assert_eq!(Route::Terminal.to_string(), "Terminal");
    }
}
