use reqwest::Method;

use crate::id::DbId;

/// Static description of an endpoint
///
/// Item and action endpoints share the collection path as a prefix (For
/// example `/api/tasks/` and `/api/tasks/7/start-timer/`)
#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: Method,
}

/// A [`PathSpec`] with any identifiers filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: String,
    pub method: Method,
}

impl PathSpec {
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    pub const fn patch(path: &'static str) -> Self {
        Self {
            path,
            method: Method::PATCH,
        }
    }

    pub const fn delete(path: &'static str) -> Self {
        Self {
            path,
            method: Method::DELETE,
        }
    }

    /// `<path><id>/`
    pub fn for_item(&self, id: DbId) -> ResolvedPath {
        ResolvedPath {
            path: format!("{}{id}/", self.path),
            method: self.method.clone(),
        }
    }

    /// `<path><id>/<action>/`
    pub fn for_action(&self, id: DbId, action: &str) -> ResolvedPath {
        ResolvedPath {
            path: format!("{}{id}/{action}/", self.path),
            method: self.method.clone(),
        }
    }
}

impl From<PathSpec> for ResolvedPath {
    fn from(value: PathSpec) -> Self {
        Self {
            path: value.path.to_string(),
            method: value.method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_and_action_paths() {
        // Arrange
        let spec = PathSpec::post("/api/tasks/");

        // Act
        let item = spec.for_item(7.into());
        let action = spec.for_action(7.into(), "start-timer");

        // Assert
        assert_eq!(item.path, "/api/tasks/7/");
        assert_eq!(action.path, "/api/tasks/7/start-timer/");
        assert_eq!(action.method, Method::POST);
    }
}
