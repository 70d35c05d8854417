//! The navigation table of the browser front-end, kept next to the API it
//! talks to. Two resources exist: the `contacts` collection and a single
//! `contact` nested under it by id.

use std::collections::HashMap;


/// A named client-side view bound to a URL path, possibly with views
/// nested under it.
pub struct Resource {
    name: &'static str,
    path: &'static str,
    children: Vec<Resource>,
}

impl Resource {
    pub fn new(name: &'static str, path: &'static str) -> Self {
        Resource {
            name,
            path,
            children: vec![],
        }
    }

    pub fn nest(mut self, child: Resource) -> Self {
        self.children.push(child);
        self
    }

    fn pattern_segments(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

pub struct RouteTable {
    resources: Vec<Resource>,
}

/// A resolved route: the resource name plus the path parameters captured
/// on the way to it.
#[derive(Debug, PartialEq)]
pub struct RouteMatch {
    pub name: &'static str,
    pub params: HashMap<String, String>,
}

impl RouteTable {
    /// The front-end route table: `/contacts` shows the collection,
    /// `/contacts/:contact_id` a single contact.
    pub fn frontend() -> Self {
        RouteTable {
            resources: vec![Resource::new("contacts", "/contacts")
                .nest(Resource::new("contact", "/:contact_id"))],
        }
    }

    /// Resolves a URL path against the table. Pattern segments starting
    /// with `:` capture the corresponding URL segment as a parameter,
    /// literal segments must match exactly. A path that walks past the
    /// deepest matching resource resolves to nothing.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        let mut params = HashMap::new();
        let name = Self::resolve_within(&self.resources, &segments, &mut params)?;
        Some(RouteMatch { name, params })
    }

    fn resolve_within(
        resources: &[Resource],
        segments: &[&str],
        params: &mut HashMap<String, String>,
    ) -> Option<&'static str> {
        for resource in resources {
            let pattern = resource.pattern_segments();
            if segments.len() < pattern.len() {
                continue;
            }
            let mut captured = Vec::new();
            let mut matched = true;
            for (pattern_segment, segment) in pattern.iter().zip(segments) {
                if let Some(param_name) = pattern_segment.strip_prefix(':') {
                    captured.push((param_name.to_string(), segment.to_string()));
                } else if pattern_segment != segment {
                    matched = false;
                    break;
                }
            }
            if !matched {
                continue;
            }
            let rest = &segments[pattern.len()..];
            if rest.is_empty() {
                params.extend(captured);
                return Some(resource.name);
            }
            let snapshot = params.clone();
            params.extend(captured);
            if let Some(name) = Self::resolve_within(&resource.children, rest, params) {
                return Some(name);
            }
            *params = snapshot;
        }
        None
    }
}
