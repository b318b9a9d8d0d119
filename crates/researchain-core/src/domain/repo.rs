//! Remote repository descriptor.

use std::path::Path;

use crate::domain::Credential;
use crate::ports::CoreError;

/// Owner login and repository name of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDescriptor {
    pub owner: String,
    pub name: String,
}

impl RepoDescriptor {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// HTTPS push URL with the token embedded for non-interactive pushes.
    ///
    /// The result is secret and must only be passed to a runner as a
    /// secret argument.
    pub fn push_url(&self, host: &str, credential: &Credential) -> String {
        format!(
            "https://{}@{host}/{}/{}.git",
            credential.expose(),
            self.owner,
            self.name
        )
    }
}

/// Repository name derived from the base name of `dir`.
pub fn repo_name_from_dir(dir: &Path) -> Result<String, CoreError> {
    dir.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "cannot derive a repository name from '{}'",
                dir.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_repo_name_is_base_name() {
        let dir = PathBuf::from("/home/user/work/myproj");
        assert_eq!(repo_name_from_dir(&dir).unwrap(), "myproj");
    }

    #[test]
    fn test_root_has_no_repo_name() {
        assert!(repo_name_from_dir(Path::new("/")).is_err());
    }

    #[test]
    fn test_push_url_embeds_token() {
        let repo = RepoDescriptor::new("octocat", "myproj");
        let credential = Credential::new("tok").unwrap();
        assert_eq!(
            repo.push_url("github.com", &credential),
            "https://tok@github.com/octocat/myproj.git"
        );
    }
}
