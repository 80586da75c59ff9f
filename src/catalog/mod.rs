// SPDX-License-Identifier: MPL-2.0
//! Product catalog loading.
//!
//! The catalog is the application's only content input: an ordered list of
//! hero slides and product records described in a `catalog.toml` file. A
//! default catalog ships embedded in the binary; `--catalog <dir>` points at
//! an external directory whose `catalog.toml` replaces it. Image references
//! in an external catalog resolve relative to that directory.
//!
//! The application consumes the shape of these records only; where the
//! images live and whether they exist is the content author's business. A
//! missing image renders as an empty region, never an error.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CATALOG_FILE: &str = "catalog.toml";

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

/// One slide of the hero banner: an image plus optional caption overlay.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Slide {
    pub image: PathBuf,
    pub alt: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One product record. Immutable once loaded.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Usage note shown in the detail view.
    pub recommendation: String,
    #[serde(default)]
    pub badge: Option<String>,
    /// Ordered image references; the first one is the card image.
    pub images: Vec<PathBuf>,
    /// Outbound quote-request link, passed to the browser untouched.
    pub quote_url: String,
}

/// The full content set for one run of the application.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Catalog {
    /// Site-wide quote-request link used by the navigation CTA.
    pub quote_url: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// An empty catalog: the UI degrades to empty regions.
    pub fn empty() -> Self {
        Self {
            quote_url: String::new(),
            slides: Vec::new(),
            products: Vec::new(),
        }
    }
}

/// Loads the catalog from `dir`, or the embedded default when no directory
/// is given.
pub fn load(dir: Option<&Path>) -> Result<Catalog> {
    match dir {
        Some(dir) => load_from_dir(dir),
        None => load_embedded(),
    }
}

/// Loads `catalog.toml` from an external directory, resolving relative
/// image references against it.
pub fn load_from_dir(dir: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(dir.join(CATALOG_FILE))?;
    let mut catalog = parse(&content)?;
    resolve_image_paths(&mut catalog, dir);
    Ok(catalog)
}

fn load_embedded() -> Result<Catalog> {
    let file = Asset::get(CATALOG_FILE)
        .ok_or_else(|| Error::Catalog(format!("embedded {CATALOG_FILE} is missing")))?;
    let content = String::from_utf8_lossy(file.data.as_ref()).to_string();
    parse(&content)
}

fn parse(content: &str) -> Result<Catalog> {
    toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))
}

fn resolve_image_paths(catalog: &mut Catalog, base: &Path) {
    for slide in &mut catalog.slides {
        if slide.image.is_relative() {
            slide.image = base.join(&slide.image);
        }
    }
    for product in &mut catalog.products {
        for image in &mut product.images {
            if image.is_relative() {
                *image = base.join(&*image);
            }
        }
    }
}
