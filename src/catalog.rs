// ABOUTME: Candidate avatars and companions offered by the selection picker
// Built-in defaults can be replaced by a JSON catalog file named in the config

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::store::{Avatar, Companion};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog at {path} has no church avatars, community avatars or companions")]
    Empty { path: PathBuf },
}

/// Which list of candidates a selection step draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Church,
    Community,
    Companion,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Church => "Church Avatar",
            Self::Community => "Community Avatar",
            Self::Companion => "Companion",
        }
    }
}

/// One row in a picker list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AvatarCatalog {
    #[serde(default)]
    pub church_avatars: Vec<Avatar>,

    #[serde(default)]
    pub community_avatars: Vec<Avatar>,

    #[serde(default)]
    pub companions: Vec<Companion>,
}

impl AvatarCatalog {
    /// Use the catalog file at `path` if given, otherwise the built-in set
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |source: serde_json::Error| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        };

        // A bare array would otherwise deserialize as a struct with every list defaulted
        let value: serde_json::Value = serde_json::from_str(&content).map_err(parse_error)?;
        if !value.is_object() {
            return Err(parse_error(serde::de::Error::custom(
                "catalog must be a JSON object",
            )));
        }

        let catalog: Self = serde_json::from_value(value).map_err(parse_error)?;
        if catalog.church_avatars.is_empty()
            && catalog.community_avatars.is_empty()
            && catalog.companions.is_empty()
        {
            return Err(CatalogError::Empty {
                path: path.to_path_buf(),
            });
        }

        info!(
            "Loaded catalog from {} ({} church, {} community, {} companions)",
            path.display(),
            catalog.church_avatars.len(),
            catalog.community_avatars.len(),
            catalog.companions.len()
        );
        Ok(catalog)
    }

    /// Candidates shipped with the application
    pub fn builtin() -> Self {
        Self {
            church_avatars: vec![
                builtin_avatar(
                    "church-steward",
                    "church",
                    "The Faithful Steward",
                    "We have kept the doors open for ninety years and we carry that history with care.",
                ),
                builtin_avatar(
                    "church-builder",
                    "church",
                    "The Bridge Builder",
                    "We want our building to be a place the whole street feels welcome in.",
                ),
                builtin_avatar(
                    "church-seeker",
                    "church",
                    "The Honest Seeker",
                    "We are smaller than we were, and we are asking what God is calling us to next.",
                ),
            ],
            community_avatars: vec![
                builtin_avatar(
                    "community-family",
                    "community",
                    "The Young Family",
                    "We are new to the neighborhood and looking for somewhere our kids can belong.",
                ),
                builtin_avatar(
                    "community-elder",
                    "community",
                    "The Long-Time Neighbor",
                    "I have watched this block change for forty years and I remember what it was.",
                ),
                builtin_avatar(
                    "community-worker",
                    "community",
                    "The Shift Worker",
                    "Between two jobs there is not much time left, but I notice who shows up for us.",
                ),
            ],
            companions: vec![
                builtin_companion(1, "Sage", "mentor", "patient, reflective", "asks gentle questions"),
                builtin_companion(2, "Scout", "explorer", "curious, energetic", "short and upbeat"),
                builtin_companion(3, "Shepherd", "pastor", "warm, steady", "speaks in stories"),
            ],
        }
    }

    /// Picker rows for a category
    pub fn entries(&self, category: Category) -> Vec<CatalogEntry> {
        match category {
            Category::Church => self.church_avatars.iter().map(avatar_entry).collect(),
            Category::Community => self.community_avatars.iter().map(avatar_entry).collect(),
            Category::Companion => self
                .companions
                .iter()
                .map(|c| CatalogEntry {
                    id: c.uuid.to_string(),
                    title: c.companion.clone(),
                    subtitle: c.companion_type.clone(),
                })
                .collect(),
        }
    }

    /// Find a church avatar by id, or by display name ignoring case
    pub fn find_church(&self, key: &str) -> Option<&Avatar> {
        find_avatar(&self.church_avatars, key)
    }

    /// Find a community avatar by id, or by display name ignoring case
    pub fn find_community(&self, key: &str) -> Option<&Avatar> {
        find_avatar(&self.community_avatars, key)
    }

    /// Find a companion by numeric id, or by name ignoring case
    pub fn find_companion(&self, key: &str) -> Option<&Companion> {
        let key = key.trim();
        if let Ok(uuid) = key.parse::<i64>() {
            if let Some(found) = self.companions.iter().find(|c| c.uuid == uuid) {
                return Some(found);
            }
        }
        self.companions
            .iter()
            .find(|c| c.companion.eq_ignore_ascii_case(key))
    }
}

fn find_avatar<'a>(avatars: &'a [Avatar], key: &str) -> Option<&'a Avatar> {
    let key = key.trim();
    avatars
        .iter()
        .find(|a| a.id == key)
        .or_else(|| avatars.iter().find(|a| a.display_name().eq_ignore_ascii_case(key)))
}

fn avatar_entry(avatar: &Avatar) -> CatalogEntry {
    CatalogEntry {
        id: avatar.id.clone(),
        title: avatar.display_name().to_string(),
        subtitle: avatar.avatar_point_of_view.clone(),
    }
}

fn builtin_avatar(id: &str, role: &str, avatar_name: &str, point_of_view: &str) -> Avatar {
    Avatar {
        id: id.to_string(),
        name: avatar_name.to_string(),
        role: role.to_string(),
        avatar_name: avatar_name.to_string(),
        avatar_point_of_view: point_of_view.to_string(),
        image_url: None,
        avatar_url: None,
        description: None,
        avatar_structured_data: None,
    }
}

fn builtin_companion(
    uuid: i64,
    name: &str,
    companion_type: &str,
    traits: &str,
    speech_pattern: &str,
) -> Companion {
    Companion {
        uuid,
        companion: name.to_string(),
        companion_type: companion_type.to_string(),
        traits: traits.to_string(),
        speech_pattern: speech_pattern.to_string(),
        knowledge_domains: "congregational discernment".to_string(),
        avatar_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_has_candidates_for_every_category() {
        let catalog = AvatarCatalog::builtin();
        for category in [Category::Church, Category::Community, Category::Companion] {
            assert!(!catalog.entries(category).is_empty(), "{category:?} is empty");
        }
    }

    #[test]
    fn test_find_by_id_and_name() {
        let catalog = AvatarCatalog::builtin();
        assert_eq!(
            catalog.find_church("church-builder").map(|a| a.id.as_str()),
            Some("church-builder")
        );
        assert_eq!(
            catalog.find_community("the young family").map(|a| a.id.as_str()),
            Some("community-family")
        );
        assert_eq!(catalog.find_companion("3").map(|c| c.companion.as_str()), Some("Shepherd"));
        assert_eq!(catalog.find_companion("scout").map(|c| c.uuid), Some(2));
        assert!(catalog.find_companion("nobody").is_none());
    }

    #[test]
    fn test_load_without_path_is_builtin() {
        let catalog = AvatarCatalog::load(None).unwrap();
        assert_eq!(catalog.companions.len(), AvatarCatalog::builtin().companions.len());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"companions":[{"UUID":9,"companion":"Ruth","companion_type":"friend"}]}"#,
        )
        .unwrap();

        let catalog = AvatarCatalog::load(Some(&path)).unwrap();
        assert!(catalog.church_avatars.is_empty());
        assert_eq!(catalog.find_companion("9").map(|c| c.companion.as_str()), Some("Ruth"));
    }

    #[test]
    fn test_bad_catalog_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "[]").unwrap();
        assert!(matches!(
            AvatarCatalog::load_from(&path),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_misspelled_catalog_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"companion":[{"UUID":9,"companion":"Ruth"}]}"#,
        )
        .unwrap();
        assert!(matches!(
            AvatarCatalog::load_from(&path),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{}").unwrap();
        assert!(matches!(
            AvatarCatalog::load(Some(&path)),
            Err(CatalogError::Empty { .. })
        ));
    }
}
