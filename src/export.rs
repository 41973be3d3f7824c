//! Writing pages to disk and the optional external conversions.
//!
//! The SVG pages are the product. Converting them (text to paths, PDF, one
//! merged PDF) is left to Inkscape and pdftk; when either is missing or fails
//! the run logs a warning and carries on.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::renderer::{render_page, RenderedPage};
use crate::sheet::all_pages;

/// Name of the merged PDF, flat page first.
pub const MERGED_PDF: &str = "scales.pdf";

/// Converts finished SVG pages into derived documents.
pub trait PostProcessor {
    /// Writes a copy of `svg` with text turned into paths, returning its path.
    fn strip_text(&self, svg: &Path) -> Result<PathBuf>;

    /// Writes a PDF rendering of `svg`, returning its path.
    fn to_pdf(&self, svg: &Path) -> Result<PathBuf>;

    /// Concatenates `pdfs` in order into `output`.
    fn merge(&self, pdfs: &[PathBuf], output: &Path) -> Result<PathBuf>;
}

/// Runs the `inkscape` and `pdftk` command-line tools.
#[derive(Debug, Clone)]
pub struct ExternalTools {
    pub inkscape: String,
    pub pdftk: String,
}

impl ExternalTools {
    pub fn from_config(config: &Config) -> Self {
        Self {
            inkscape: config.inkscape.clone(),
            pdftk: config.pdftk.clone(),
        }
    }
}

impl PostProcessor for ExternalTools {
    fn strip_text(&self, svg: &Path) -> Result<PathBuf> {
        let output = sibling(svg, "_notxt", "svg");
        run_tool(
            &self.inkscape,
            &[
                "--vacuum-defs".as_ref(),
                "-T".as_ref(),
                svg.as_os_str(),
                "-l".as_ref(),
                "-o".as_ref(),
                output.as_os_str(),
            ],
            &output,
        )
    }

    fn to_pdf(&self, svg: &Path) -> Result<PathBuf> {
        let output = sibling(svg, "", "pdf");
        let mut target = std::ffi::OsString::from("--export-filename=");
        target.push(&output);
        run_tool(&self.inkscape, &[svg.as_os_str(), target.as_os_str()], &output)
    }

    fn merge(&self, pdfs: &[PathBuf], output: &Path) -> Result<PathBuf> {
        let mut args: Vec<&std::ffi::OsStr> = pdfs.iter().map(|p| p.as_os_str()).collect();
        args.extend(["cat".as_ref(), "output".as_ref(), output.as_os_str()]);
        run_tool(&self.pdftk, &args, output)
    }
}

/// Runs `program` to completion and checks that it produced `output`.
fn run_tool(program: &str, args: &[&std::ffi::OsStr], output: &Path) -> Result<PathBuf> {
    let failure = |reason: String| Error::ExternalTool {
        tool: program.to_string(),
        reason,
    };
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| failure(e.to_string()))?;
    if !status.success() {
        return Err(failure(format!("exited with {status}")));
    }
    if !output.exists() {
        return Err(failure(format!("did not write {}", output.display())));
    }
    Ok(output.to_path_buf())
}

/// `dir/stem.svg` → `dir/stem{suffix}.{extension}`.
fn sibling(path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    path.with_file_name(format!("{stem}{suffix}.{extension}"))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `dir/stem.svg`, and `dir/stem.json` when `with_layout` is set.
pub fn write_page(dir: &Path, stem: &str, page: &RenderedPage, with_layout: bool) -> Result<Vec<PathBuf>> {
    let svg_path = dir.join(format!("{stem}.svg"));
    write_file(&svg_path, &page.svg)?;
    info!("wrote {}", svg_path.display());
    let mut written = vec![svg_path];

    if with_layout {
        let json_path = dir.join(format!("{stem}.json"));
        write_file(&json_path, &page.layout.to_json()?)?;
        info!("wrote {}", json_path.display());
        written.push(json_path);
    }
    Ok(written)
}

/// Keeps the result of an optional step, logging and dropping failures.
fn best_effort(step: &str, result: Result<PathBuf>) -> Option<PathBuf> {
    match result {
        Ok(path) => {
            info!("{step}: wrote {}", path.display());
            Some(path)
        }
        Err(e) => {
            warn!("{step} skipped: {e}");
            None
        }
    }
}

/// Renders and writes every page, converting them with the configured tools.
pub fn run(config: &Config) -> Result<Vec<PathBuf>> {
    run_with(config, &ExternalTools::from_config(config))
}

/// Renders and writes every page, converting them with `post` when enabled.
///
/// Returns every file written. Only rendering and writing the pages can fail;
/// post-processing failures are logged and skipped.
pub fn run_with(config: &Config, post: &dyn PostProcessor) -> Result<Vec<PathBuf>> {
    let texts = config.locale().texts();
    let dir = config.output_dir.as_path();
    fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    let mut pdfs = Vec::new();
    let pages = all_pages()?;
    for page in &pages {
        let rendered = render_page(page, texts)?;
        let files = write_page(dir, page.kind.file_stem(), &rendered, config.write_layout)?;
        let svg = files[0].clone();
        written.extend(files);

        if !config.convert {
            continue;
        }
        written.extend(best_effort("strip text", post.strip_text(&svg)));
        if let Some(pdf) = best_effort("pdf export", post.to_pdf(&svg)) {
            pdfs.push(pdf.clone());
            written.push(pdf);
        }
    }

    if config.convert {
        if pdfs.len() == pages.len() {
            written.extend(best_effort("merge", post.merge(&pdfs, &dir.join(MERGED_PDF))));
        } else {
            warn!("merge skipped: {} of {} pages converted to pdf", pdfs.len(), pages.len());
        }
    }
    Ok(written)
}
