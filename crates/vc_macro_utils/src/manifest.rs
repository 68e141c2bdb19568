use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::{Ident, Span};
use syn::punctuated::Punctuated;
use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for another crate as seen from the
/// caller's Cargo.toml.
///
/// Generated code must name `vc_inspect` items in a way that resolves from
/// the crate invoking the macro, which may only depend on the `vc_snapshot`
/// umbrella crate.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_inspect"));
/// ```
///
/// Reading the manifest is not cheap, the caller should store the result
/// and call this only once per proc-macro invocation.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `vc_` and the target crate
///    depends on `vc_snapshot`, return `::vc_snapshot::short_name`
///    (e.g. `vc_inspect` -> `::vc_snapshot::inspect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A missing or unreadable manifest behaves like an empty one.
///
/// ## Note
/// When a crate needs to reference itself, library code should use
/// `crate::...`, while doctests and other external code use the absolute
/// path `::crate_name`. An alias such as `extern crate self as vc_inspect;`
/// in the crate root supports both.
#[derive(Debug)]
pub struct Manifest {
    manifest: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

const UMBRELLA_NAME: &str = "vc_snapshot";
const CRATE_PREFIX: &str = "vc_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    #[inline(never)]
    fn get_manifest_modified_time(cargo_manifest_path: &Path) -> Option<SystemTime> {
        std::fs::metadata(cargo_manifest_path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Option<Document<Box<str>>> {
        let content = std::fs::read_to_string(path).ok()?;
        Document::parse(content.into_boxed_str()).ok()
    }

    /// Builds `::a::b::...` from plain identifiers.
    fn absolute_path<'a>(segments: impl IntoIterator<Item = &'a str>) -> syn::Path {
        let segments: Punctuated<syn::PathSegment, syn::Token![::]> = segments
            .into_iter()
            .map(|segment| syn::PathSegment::from(Ident::new(segment, Span::call_site())))
            .collect();

        syn::Path {
            leading_colon: Some(Default::default()),
            segments,
        }
    }

    #[inline]
    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute_path([name]));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(UMBRELLA_NAME) {
            return Some(Self::absolute_path([UMBRELLA_NAME, module]));
        }

        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order and examples.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let Some(manifest) = &self.manifest else {
            return Self::absolute_path([name]);
        };

        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::absolute_path([name])
    }

    /// Obtain the [Manifest] of the caller's Cargo.toml.
    ///
    /// The parsed manifest is cached until the file is modified.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::get_manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::get_manifest_modified_time(&manifest_path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && modified_time.is_some()
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}
