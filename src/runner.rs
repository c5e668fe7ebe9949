// src/runner.rs
use std::path::PathBuf;

use crate::{
    catalog::Catalog,
    config::options::GenOptions,
    core::text::unify_newlines,
    error::Result,
    file,
    render,
    splice::{self, MarkerError},
};

/// What a run did.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The page was rewritten.
    Written {
        path: PathBuf,
        armor_categories: usize,
        weapon_categories: usize,
    },
    /// Dry run: the page that would have been written.
    DryRun(String),
    /// Markers missing or malformed; the page was not touched.
    MarkersMissing(MarkerError),
}

/// Regenerate both regions of `html` from `catalog`. Pure; no I/O.
/// The page comes back with `\n` line endings throughout.
pub fn generate(html: &str, catalog: &Catalog) -> Result<String, MarkerError> {
    let html = unify_newlines(html);
    let splice = splice::locate(&html)?;
    let blocks = render::render(catalog);
    Ok(file::compose(&splice, &blocks))
}

/// Read the header, rebuild the catalog and rewrite the page.
pub fn run(opts: &GenOptions) -> Result<Outcome> {
    let header = file::read_text(&opts.header_path)?;
    let catalog = Catalog::from_header(&header);
    logf!(
        "{}: {} armor categories, {} weapon categories",
        opts.header_path.display(),
        catalog.armor.len(),
        catalog.weapons.len()
    );
    if catalog.is_empty() {
        logw!("no item tables recognized in {}", opts.header_path.display());
    }

    if let Some(out) = &opts.catalog_out {
        let path = file::write_catalog_json(out, &catalog)?;
        logf!("catalog written to {}", path.display());
    }

    let html = file::read_text(&opts.html_path)?;
    let page = match generate(&html, &catalog) {
        Ok(page) => page,
        Err(e) => {
            logw!("{}: {e}", opts.html_path.display());
            return Ok(Outcome::MarkersMissing(e));
        }
    };

    if opts.dry_run {
        return Ok(Outcome::DryRun(page));
    }

    if page == html {
        logd!("{} already up to date", opts.html_path.display());
    }
    file::overwrite(&opts.html_path, &page)?;
    logf!("wrote {}", opts.html_path.display());

    Ok(Outcome::Written {
        path: opts.html_path.clone(),
        armor_categories: catalog.armor.len(),
        weapon_categories: catalog.weapons.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "std::vector<Armor> head_t\n{\n    {\"iron_helm\", 1},\n};\n";
    const PAGE: &str = "<form>\n<!--armor begin-->\n<select id=\"stale_dd\"></select>\n<!--armor stop-->\n<!--armor begin2-->\n<!--armor stop2-->\n</form>\n";

    #[test]
    fn crlf_page_and_header_give_the_lf_result() {
        let lf = generate(PAGE, &Catalog::from_header(HEADER)).unwrap();
        let crlf = generate(
            &PAGE.replace('\n', "\r\n"),
            &Catalog::from_header(&HEADER.replace('\n', "\r\n")),
        )
        .unwrap();
        assert_eq!(crlf, lf);
        assert!(!crlf.contains('\r'));
        assert!(crlf.contains(r#"<select id="head_dd" class="item-select">"#));
        assert!(!crlf.contains("stale_dd"));
    }
}
