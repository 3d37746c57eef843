//! Ordered route table for the application shell.
//!
//! Routes are evaluated top to bottom and the first structural match wins.
//! Each entry binds a path pattern either to a redirect or to a handler that
//! turns the extracted [`RouteParams`] into a [`View`] descriptor. The table
//! refuses to be built when an entry can never be reached because an earlier
//! entry already matches everything it would.
//!
//! Matching is non-strict and case-insensitive: one trailing slash is optional
//! and literal segments compare ignoring ASCII case.

use std::fmt;
use std::sync::LazyLock;

use thiserror::Error;

/// Root of the single-page application.
pub const APP_ROOT: &str = "/app/";
pub const DASHBOARD_PATH: &str = "/app/dashboard/";
pub const HISTORY_PATH: &str = "/app/history/";
pub const CONTENT_PATH: &str = "/app/content/";
pub const WORD_PATH: &str = "/app/word/";
pub const NEW_CURVE_PATH: &str = "/app/new/";
pub const REQUESTS_PATH: &str = "/app/requests/";

/// Page-level view selected by the router, with any routing-derived input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    History,
    ContentList,
    ValueTypeList,
    CreateCurve,
    Requests,
    /// Request detail; `id` is the raw digit string from the URL.
    RequestEdit { id: String },
    /// Room detail; `id` is the raw digit string from the URL.
    Room { id: String },
}

impl View {
    /// Title shown in the browser tab.
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::History => "History",
            View::ContentList => "Contents",
            View::ValueTypeList => "Expression Words",
            View::CreateCurve => "New Curve",
            View::Requests => "Requests",
            View::RequestEdit { .. } => "Request",
            View::Room { .. } => "Room",
        }
    }
}

/// How much of the path a pattern has to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The whole path must match the pattern.
    Exact,
    /// The path must start with the pattern on a segment boundary.
    Prefix,
}

/// Constraint applied to a captured path segment before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamConstraint {
    /// Any non-empty segment.
    Any,
    /// A non-empty run of ASCII decimal digits.
    Digits,
}

impl ParamConstraint {
    pub fn accepts(self, value: &str) -> bool {
        match self {
            ParamConstraint::Any => !value.is_empty(),
            ParamConstraint::Digits => !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()),
        }
    }

    /// A value this constraint accepts and every stricter one rejects.
    fn witness(self) -> &'static str {
        match self {
            ParamConstraint::Any => "_",
            ParamConstraint::Digits => "0",
        }
    }
}

/// Handler turning extracted parameters into a view.
pub type Handler = fn(&RouteParams) -> Option<View>;

/// What a matched entry leads to.
#[derive(Clone, Copy)]
pub enum Target {
    Redirect(&'static str),
    View(Handler),
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Redirect(to) => f.debug_tuple("Redirect").field(to).finish(),
            Target::View(_) => f.write_str("View(..)"),
        }
    }
}

/// Declarative description of one route, before validation.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: &'static str,
    mode: MatchMode,
    constraints: Vec<(&'static str, ParamConstraint)>,
    target: Target,
}

impl RouteEntry {
    pub fn exact(pattern: &'static str, handler: Handler) -> Self {
        Self::new(pattern, MatchMode::Exact, Target::View(handler))
    }

    pub fn prefix(pattern: &'static str, handler: Handler) -> Self {
        Self::new(pattern, MatchMode::Prefix, Target::View(handler))
    }

    /// Exact-match entry that sends the browser to `to`.
    pub fn redirect(pattern: &'static str, to: &'static str) -> Self {
        Self::new(pattern, MatchMode::Exact, Target::Redirect(to))
    }

    fn new(pattern: &'static str, mode: MatchMode, target: Target) -> Self {
        Self {
            pattern,
            mode,
            constraints: Vec::new(),
            target,
        }
    }

    /// Restrict the parameter `name` to the given constraint.
    pub fn with_param(mut self, name: &'static str, constraint: ParamConstraint) -> Self {
        self.constraints.push((name, constraint));
        self
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }
}

/// Parameters extracted from a matched path, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<(&'static str, String)>,
}

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outcome of resolving a location path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Redirect { to: &'static str },
    View(View),
    NoMatch,
}

impl Resolution {
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Resolution::Redirect { to } => Some(*to),
            _ => None,
        }
    }
}

/// Reasons a route table cannot be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route pattern {0:?} must start with '/'")]
    NotAbsolute(&'static str),
    #[error("route pattern {0:?} has an empty parameter name")]
    EmptyParamName(&'static str),
    #[error("route pattern {pattern:?} declares parameter {name:?} twice")]
    DuplicateParam { pattern: &'static str, name: &'static str },
    #[error("constraint for {name:?} does not name a parameter of {pattern:?}")]
    UnknownParam { pattern: &'static str, name: &'static str },
    #[error("route {later:?} is unreachable: {earlier:?} matches first")]
    Shadowed { earlier: &'static str, later: &'static str },
    #[error("redirect from {from:?} points at {to:?}, which is not routed to a view")]
    DanglingRedirect { from: &'static str, to: &'static str },
    #[error("menu entry {label:?} links to {path:?}, which is not an exact view route")]
    DeadLink { label: &'static str, path: String },
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(&'static str),
    Param(&'static str, ParamConstraint),
}

impl Segment {
    fn witness(&self) -> &'static str {
        match self {
            Segment::Literal(text) => *text,
            Segment::Param(_, constraint) => constraint.witness(),
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    pattern: &'static str,
    mode: MatchMode,
    segments: Vec<Segment>,
    target: Target,
}

impl CompiledRoute {
    fn compile(entry: RouteEntry) -> Result<Self, RouteTableError> {
        let pattern = entry.pattern;
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(RouteTableError::NotAbsolute(pattern));
        };

        let mut segments = Vec::new();
        for raw in split_segments(rest) {
            let segment = match raw.strip_prefix(':') {
                Some("") => return Err(RouteTableError::EmptyParamName(pattern)),
                Some(name) => {
                    if segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing, _) if *existing == name))
                    {
                        return Err(RouteTableError::DuplicateParam { pattern, name });
                    }
                    let constraint = entry
                        .constraints
                        .iter()
                        .find(|(n, _)| *n == name)
                        .map_or(ParamConstraint::Any, |(_, c)| *c);
                    Segment::Param(name, constraint)
                }
                None => Segment::Literal(raw),
            };
            segments.push(segment);
        }

        for (name, _) in &entry.constraints {
            let declared = segments
                .iter()
                .any(|s| matches!(s, Segment::Param(n, _) if n == name));
            if !declared {
                return Err(RouteTableError::UnknownParam {
                    pattern,
                    name: *name,
                });
            }
        }

        Ok(Self {
            pattern,
            mode: entry.mode,
            segments,
            target: entry.target,
        })
    }

    /// Match `path` against this route, capturing parameters.
    fn captures(&self, path: &str) -> Option<RouteParams> {
        let rest = path.strip_prefix('/').unwrap_or(path);
        let mut parts = split_segments(rest);
        let mut params = RouteParams::default();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(text) => {
                    if !text.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name, constraint) => {
                    if !constraint.accepts(part) {
                        return None;
                    }
                    params.values.push((*name, part.to_string()));
                }
            }
        }

        match self.mode {
            MatchMode::Exact if parts.next().is_some() => None,
            _ => Some(params),
        }
    }

    /// A concrete path this route matches, used to detect shadowing.
    fn witness(&self) -> String {
        let mut path = String::from("/");
        for segment in &self.segments {
            path.push_str(segment.witness());
            path.push('/');
        }
        path
    }
}

/// Split a path (without its leading slash) into segments, ignoring one
/// trailing slash. The empty path has no segments.
fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    trimmed.split('/').filter({
        let empty = trimmed.is_empty();
        move |_| !empty
    })
}

/// Validated, ordered route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    /// Build a table from entries in priority order.
    pub fn new(entries: impl IntoIterator<Item = RouteEntry>) -> Result<Self, RouteTableError> {
        let routes = entries
            .into_iter()
            .map(CompiledRoute::compile)
            .collect::<Result<Vec<_>, _>>()?;

        for (index, later) in routes.iter().enumerate() {
            let witness = later.witness();
            if let Some(earlier) = routes[..index].iter().find(|r| r.captures(&witness).is_some()) {
                return Err(RouteTableError::Shadowed {
                    earlier: earlier.pattern,
                    later: later.pattern,
                });
            }
        }

        let table = Self { routes };
        for route in &table.routes {
            if let Target::Redirect(to) = route.target {
                if table.resolve_view(to).is_none() {
                    return Err(RouteTableError::DanglingRedirect {
                        from: route.pattern,
                        to,
                    });
                }
            }
        }
        Ok(table)
    }

    /// Resolve a location path to the first matching route.
    pub fn resolve(&self, path: &str) -> Resolution {
        for route in &self.routes {
            let Some(params) = route.captures(path) else {
                continue;
            };
            return match route.target {
                Target::Redirect(to) => {
                    tracing::trace!(path, to, "route redirect");
                    Resolution::Redirect { to }
                }
                Target::View(handler) => match handler(&params) {
                    Some(view) => {
                        tracing::trace!(path, pattern = route.pattern, ?view, "route matched");
                        Resolution::View(view)
                    }
                    None => Resolution::NoMatch,
                },
            };
        }
        Resolution::NoMatch
    }

    /// Resolve a path to the view it finally renders, following redirects.
    pub fn resolve_view(&self, path: &str) -> Option<View> {
        let mut current = path;
        // A redirect chain longer than the table must revisit some route.
        for _ in 0..=self.routes.len() {
            match self.resolve(current) {
                Resolution::View(view) => return Some(view),
                Resolution::Redirect { to } => current = to,
                Resolution::NoMatch => return None,
            }
        }
        None
    }

    /// Whether `path` is literally the pattern of an exact, parameterless
    /// view route.
    pub fn is_exact_view_route(&self, path: &str) -> bool {
        self.routes.iter().any(|route| {
            route.mode == MatchMode::Exact
                && matches!(route.target, Target::View(_))
                && route.segments.iter().all(|s| matches!(s, Segment::Literal(_)))
                && route.pattern == path
        })
    }

    pub fn patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.iter().map(|route| route.pattern)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn id_param(params: &RouteParams) -> Option<String> {
    params.get("id").map(str::to_owned)
}

/// Route entries of the application, most specific first.
pub fn app_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::redirect(APP_ROOT, DASHBOARD_PATH),
        RouteEntry::exact(DASHBOARD_PATH, |_| Some(View::Dashboard)),
        RouteEntry::exact(HISTORY_PATH, |_| Some(View::History)),
        RouteEntry::exact(CONTENT_PATH, |_| Some(View::ContentList)),
        RouteEntry::exact(WORD_PATH, |_| Some(View::ValueTypeList)),
        RouteEntry::exact(NEW_CURVE_PATH, |_| Some(View::CreateCurve)),
        RouteEntry::exact(REQUESTS_PATH, |_| Some(View::Requests)),
        RouteEntry::prefix("/app/requests/:id", |p| {
            id_param(p).map(|id| View::RequestEdit { id })
        })
        .with_param("id", ParamConstraint::Digits),
        RouteEntry::exact("/app/rooms/:id", |p| id_param(p).map(|id| View::Room { id }))
            .with_param("id", ParamConstraint::Digits),
    ]
}

static APP_TABLE: LazyLock<RouteTable> = LazyLock::new(|| {
    RouteTable::new(app_routes()).expect("application route table must be well-ordered")
});

/// The application's route table, built on first use.
pub fn route_table() -> &'static RouteTable {
    &APP_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(app_routes()).unwrap()
    }

    #[test]
    fn test_literal_paths_render_their_views() {
        let table = table();
        let cases = [
            (DASHBOARD_PATH, View::Dashboard),
            (HISTORY_PATH, View::History),
            (CONTENT_PATH, View::ContentList),
            (WORD_PATH, View::ValueTypeList),
            (NEW_CURVE_PATH, View::CreateCurve),
            (REQUESTS_PATH, View::Requests),
        ];
        for (path, view) in cases {
            assert_eq!(table.resolve(path), Resolution::View(view), "{path}");
        }
    }

    #[test]
    fn test_root_redirects_to_dashboard() {
        let table = table();
        assert_eq!(
            table.resolve("/app/"),
            Resolution::Redirect { to: DASHBOARD_PATH }
        );
        assert_eq!(table.resolve_view("/app/"), table.resolve_view(DASHBOARD_PATH));
        assert_eq!(table.resolve_view("/app/"), Some(View::Dashboard));
    }

    #[test]
    fn test_request_detail_extracts_id() {
        let table = table();
        assert_eq!(
            table.resolve("/app/requests/42"),
            Resolution::View(View::RequestEdit { id: "42".to_string() })
        );
    }

    #[test]
    fn test_request_detail_is_prefix_match() {
        let table = table();
        assert_eq!(
            table.resolve("/app/requests/42/history"),
            Resolution::View(View::RequestEdit { id: "42".to_string() })
        );
        assert_eq!(table.resolve("/app/requests/42abc"), Resolution::NoMatch);
    }

    #[test]
    fn test_non_numeric_request_id_falls_through() {
        let table = table();
        assert_eq!(table.resolve("/app/requests/abc"), Resolution::NoMatch);
        assert_eq!(table.resolve("/app/requests/-1"), Resolution::NoMatch);
    }

    #[test]
    fn test_room_requires_exact_numeric_path() {
        let table = table();
        assert_eq!(
            table.resolve("/app/rooms/7"),
            Resolution::View(View::Room { id: "7".to_string() })
        );
        assert_eq!(table.resolve("/app/rooms/7x"), Resolution::NoMatch);
        assert_eq!(table.resolve("/app/rooms/7/members"), Resolution::NoMatch);
        assert_eq!(table.resolve("/app/rooms/"), Resolution::NoMatch);
    }

    #[test]
    fn test_id_is_not_range_checked() {
        let table = table();
        let huge = "99999999999999999999999999";
        assert_eq!(
            table.resolve(&format!("/app/rooms/{huge}")),
            Resolution::View(View::Room { id: huge.to_string() })
        );
    }

    #[test]
    fn test_trailing_slash_and_case_are_ignored() {
        let table = table();
        assert_eq!(table.resolve("/app/history"), Resolution::View(View::History));
        assert_eq!(table.resolve("/APP/History/"), Resolution::View(View::History));
        assert_eq!(
            table.resolve("/app/rooms/7/"),
            Resolution::View(View::Room { id: "7".to_string() })
        );
    }

    #[test]
    fn test_unknown_paths_do_not_match() {
        let table = table();
        for path in ["/", "", "/app/unknown/", "/app/dashboard/extra", "/other/", "/app//dashboard/"] {
            assert_eq!(table.resolve(path), Resolution::NoMatch, "{path:?}");
        }
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new([
            RouteEntry::exact("/items/new", |_| Some(View::CreateCurve)),
            RouteEntry::exact("/items/:id", |p| {
                p.get("id").map(|id| View::Room { id: id.to_string() })
            }),
        ])
        .unwrap();
        assert_eq!(table.resolve("/items/new"), Resolution::View(View::CreateCurve));
        assert_eq!(
            table.resolve("/items/other"),
            Resolution::View(View::Room { id: "other".to_string() })
        );
    }

    #[test]
    fn test_shadowed_entry_is_rejected() {
        let err = RouteTable::new([
            RouteEntry::prefix("/app/requests/:id", |_| Some(View::Requests)),
            RouteEntry::exact("/app/requests/:id/edit", |_| Some(View::Requests)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RouteTableError::Shadowed {
                earlier: "/app/requests/:id",
                later: "/app/requests/:id/edit",
            }
        );
    }

    #[test]
    fn test_unconstrained_param_shadows_literal() {
        let err = RouteTable::new([
            RouteEntry::exact("/items/:id", |_| Some(View::Requests)),
            RouteEntry::exact("/items/new", |_| Some(View::CreateCurve)),
        ])
        .unwrap_err();
        assert!(matches!(err, RouteTableError::Shadowed { .. }));
    }

    #[test]
    fn test_constrained_param_before_unconstrained_is_allowed() {
        let table = RouteTable::new([
            RouteEntry::exact("/items/:id", |p| {
                p.get("id").map(|id| View::Room { id: id.to_string() })
            })
            .with_param("id", ParamConstraint::Digits),
            RouteEntry::exact("/items/:slug", |p| {
                p.get("slug").map(|id| View::RequestEdit { id: id.to_string() })
            }),
        ])
        .unwrap();
        assert_eq!(
            table.resolve("/items/12"),
            Resolution::View(View::Room { id: "12".to_string() })
        );
        assert_eq!(
            table.resolve("/items/abc"),
            Resolution::View(View::RequestEdit { id: "abc".to_string() })
        );
    }

    #[test]
    fn test_unconstrained_param_before_constrained_is_rejected() {
        let err = RouteTable::new([
            RouteEntry::exact("/items/:slug", |_| Some(View::Requests)),
            RouteEntry::exact("/items/:id", |_| Some(View::Room { id: String::new() }))
                .with_param("id", ParamConstraint::Digits),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RouteTableError::Shadowed {
                earlier: "/items/:slug",
                later: "/items/:id",
            }
        );
    }

    #[test]
    fn test_invalid_patterns_are_rejected() {
        assert_eq!(
            RouteTable::new([RouteEntry::exact("app/", |_| Some(View::Dashboard))]).unwrap_err(),
            RouteTableError::NotAbsolute("app/")
        );
        assert_eq!(
            RouteTable::new([RouteEntry::exact("/a/:", |_| Some(View::Dashboard))]).unwrap_err(),
            RouteTableError::EmptyParamName("/a/:")
        );
        assert_eq!(
            RouteTable::new([RouteEntry::exact("/a/:id/:id", |_| Some(View::Dashboard))])
                .unwrap_err(),
            RouteTableError::DuplicateParam {
                pattern: "/a/:id/:id",
                name: "id"
            }
        );
        assert_eq!(
            RouteTable::new([RouteEntry::exact("/a/", |_| Some(View::Dashboard))
                .with_param("id", ParamConstraint::Digits)])
            .unwrap_err(),
            RouteTableError::UnknownParam {
                pattern: "/a/",
                name: "id"
            }
        );
    }

    #[test]
    fn test_dangling_and_looping_redirects_are_rejected() {
        let err = RouteTable::new([RouteEntry::redirect("/app/", "/nowhere/")]).unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DanglingRedirect {
                from: "/app/",
                to: "/nowhere/"
            }
        );

        let err = RouteTable::new([
            RouteEntry::redirect("/a/", "/b/"),
            RouteEntry::redirect("/b/", "/a/"),
        ])
        .unwrap_err();
        assert!(matches!(err, RouteTableError::DanglingRedirect { .. }));
    }

    #[test]
    fn test_handler_returning_none_is_no_match() {
        let table = RouteTable::new([RouteEntry::exact("/x/", |_| None)]).unwrap();
        assert_eq!(table.resolve("/x/"), Resolution::NoMatch);
    }

    #[test]
    fn test_exact_view_routes() {
        let table = table();
        assert!(table.is_exact_view_route(DASHBOARD_PATH));
        assert!(table.is_exact_view_route(REQUESTS_PATH));
        assert!(!table.is_exact_view_route(APP_ROOT));
        assert!(!table.is_exact_view_route("/app/rooms/:id"));
        assert!(!table.is_exact_view_route("/app/dashboard"));
    }

    #[test]
    fn test_static_table_matches_declaration() {
        let patterns: Vec<_> = route_table().patterns().collect();
        assert_eq!(patterns.len(), 9);
        assert_eq!(patterns[0], APP_ROOT);
        assert_eq!(patterns[8], "/app/rooms/:id");
    }
}
