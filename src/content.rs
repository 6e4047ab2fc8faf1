use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};

#[cfg(feature = "ssr")]
use crate::highlight::render_markdown;

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Vec<Project>>> =
    LazyLock::new(DashMap::new);
pub static GLOBAL_DETAIL_CACHE: LazyLock<DashMap<String, Option<String>>> =
    LazyLock::new(DashMap::new);

/// One markdown file per project: YAML frontmatter for the structured
/// fields, body for the long-form write-up shown in the modal.
#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("project not found")]
    NotFound,
    #[error("couldn't parse project content")]
    Parse,
}

/// Device variant a gallery collection was captured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Desktop,
    Mobile,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Desktop => "Desktop",
            ViewMode::Mobile => "Mobile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryCollection {
    pub mode: ViewMode,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub year: String,
    pub duration: String,
    pub team: String,
    pub order: u32,
    pub tech: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryCollection>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
}

impl Project {
    /// The gallery tab only exists when the first collection has something
    /// to show.
    pub fn has_gallery(&self) -> bool {
        self.gallery.first().is_some_and(|c| !c.images.is_empty())
    }

    /// The device toggle is only rendered when there is a choice to make.
    pub fn has_view_toggle(&self) -> bool {
        self.gallery.len() > 1
    }

    /// Collection for `mode`, falling back to the first defined collection
    /// when the project never captured that variant.
    pub fn collection_for(&self, mode: ViewMode) -> Option<&GalleryCollection> {
        self.gallery
            .iter()
            .find(|c| c.mode == mode)
            .or_else(|| self.gallery.first())
    }
}

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    summary: String,
    description: String,
    image: String,
    category: String,
    year: String,
    duration: String,
    team: String,
    order: u32,
    tech: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    gallery: Vec<GalleryCollection>,
    #[serde(default)]
    live_url: Option<String>,
    #[serde(default)]
    repo_url: Option<String>,
}

#[cfg(feature = "ssr")]
impl FrontMatter {
    fn into_project(self, slug: String) -> Project {
        Project {
            slug,
            title: self.title,
            summary: self.summary,
            description: self.description,
            image: self.image,
            category: self.category,
            year: self.year,
            duration: self.duration,
            team: self.team,
            order: self.order,
            tech: self.tech,
            features: self.features,
            gallery: self.gallery,
            live_url: self.live_url,
            repo_url: self.repo_url,
        }
    }
}

fn slug_of(file_name: &str) -> String {
    file_name
        .strip_suffix(".md")
        .unwrap_or(file_name)
        .to_string()
}

/// Every embedded project, in display order. Parsed once per process.
#[cfg(feature = "ssr")]
pub async fn load_projects() -> Result<Vec<Project>, ContentError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(hit) = cache.get("") {
        return Ok(hit.clone());
    }

    let matter = Matter::<YAML>::new();
    let mut projects = Assets::iter()
        .map(|name| {
            let file = Assets::get(&name).ok_or(ContentError::NotFound)?;
            let text = String::from_utf8(file.data.into()).map_err(|_| ContentError::Parse)?;
            let fm = matter
                .parse_with_struct::<FrontMatter>(&text)
                .ok_or(ContentError::Parse)?;
            Ok(fm.data.into_project(slug_of(&name)))
        })
        .collect::<Result<Vec<_>, ContentError>>()?;
    projects.sort_by_key(|p| p.order);

    cache.insert(String::new(), projects.clone());
    Ok(projects)
}

/// Rendered HTML for a project's long-form write-up, memoized per slug.
#[cfg(feature = "ssr")]
pub async fn get_detail(slug: String) -> Result<String, ContentError> {
    let cache = &*GLOBAL_DETAIL_CACHE;
    if let Some(hit) = cache.get(&slug) {
        return hit.clone().ok_or(ContentError::NotFound);
    }

    let rendered = Assets::get(&format!("{slug}.md")).and_then(|file| {
        let text = String::from_utf8(file.data.into()).ok()?;
        let body = Matter::<YAML>::new().parse(&text).content;
        Some(render_markdown(&body))
    });

    cache.insert(slug, rendered.clone());
    rendered.ok_or(ContentError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(mode: ViewMode, images: &[&str]) -> GalleryCollection {
        GalleryCollection {
            mode,
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn project_with_gallery(gallery: Vec<GalleryCollection>) -> Project {
        Project {
            slug: "sample".to_string(),
            title: "Sample".to_string(),
            summary: String::new(),
            description: String::new(),
            image: "/images/sample.png".to_string(),
            category: "Web Development".to_string(),
            year: "2025".to_string(),
            duration: "1 month".to_string(),
            team: "Solo".to_string(),
            order: 1,
            tech: vec!["Rust".to_string()],
            features: Vec::new(),
            gallery,
            live_url: None,
            repo_url: None,
        }
    }

    #[test]
    fn gallery_requires_nonempty_first_collection() {
        assert!(!project_with_gallery(Vec::new()).has_gallery());
        assert!(!project_with_gallery(vec![collection(ViewMode::Desktop, &[])]).has_gallery());
        assert!(
            project_with_gallery(vec![collection(ViewMode::Desktop, &["a.png"])]).has_gallery()
        );
    }

    #[test]
    fn view_toggle_needs_more_than_one_collection() {
        let single = project_with_gallery(vec![collection(ViewMode::Desktop, &["a.png"])]);
        assert!(!single.has_view_toggle());

        let both = project_with_gallery(vec![
            collection(ViewMode::Desktop, &["a.png"]),
            collection(ViewMode::Mobile, &["b.png"]),
        ]);
        assert!(both.has_view_toggle());
    }

    #[test]
    fn missing_view_mode_falls_back_to_first_collection() {
        let desktop_only = project_with_gallery(vec![collection(ViewMode::Desktop, &["a.png"])]);

        let picked = desktop_only.collection_for(ViewMode::Mobile);
        assert_eq!(picked.map(|c| c.mode), Some(ViewMode::Desktop));

        assert!(project_with_gallery(Vec::new())
            .collection_for(ViewMode::Mobile)
            .is_none());
    }

    #[test]
    fn slug_strips_markdown_extension() {
        assert_eq!(slug_of("solax.md"), "solax");
        assert_eq!(slug_of("solax"), "solax");
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn embedded_projects_parse() {
        let projects = load_projects().await.expect("embedded content parses");
        assert!(!projects.is_empty());
        assert!(projects.windows(2).all(|w| w[0].order <= w[1].order));

        // The landing-page project carries both device galleries.
        let solax = projects
            .iter()
            .find(|p| p.slug == "solax")
            .expect("solax project exists");
        assert!(solax.has_gallery());
        assert!(solax.has_view_toggle());
        let desktop = solax.collection_for(ViewMode::Desktop).unwrap();
        let mobile = solax.collection_for(ViewMode::Mobile).unwrap();
        assert_eq!(desktop.images.len(), 6);
        assert_eq!(mobile.images.len(), 5);
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn detail_renders_markdown_and_misses_are_cached() {
        let html = get_detail("codeguardian".to_string())
            .await
            .expect("detail renders");
        assert!(html.contains("<h2>") || html.contains("<p>"));

        let missing = get_detail("no-such-project".to_string()).await;
        assert_eq!(missing, Err(ContentError::NotFound));
        // Second lookup hits the negative cache and stays an error.
        let missing = get_detail("no-such-project".to_string()).await;
        assert_eq!(missing, Err(ContentError::NotFound));
    }
}
